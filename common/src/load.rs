//! 給与一覧の読み込み結果の解釈
//!
//! HTTPクライアント（reqwest / fetch）に依存しない部分。
//! ステータスコードとレスポンス本文から結果を判定する。

use thiserror::Error;

use crate::types::SalaryRecord;

/// 一覧読み込みの失敗
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    /// 404: サーバーにデータファイルがない
    #[error("Archivo de datos de salarios no encontrado en el servidor.")]
    DatasetNotFound,

    /// 404以外の失敗ステータス
    #[error("Error al cargar los datos: HTTP error! status: {0}")]
    Status(u16),

    /// 通信エラー・JSON解析エラー
    #[error("Error al cargar los datos: {0}")]
    Transport(String),
}

/// ステータスコードを判定（成功ならNone）
pub fn check_status(status: u16) -> Option<LoadError> {
    match status {
        200..=299 => None,
        404 => Some(LoadError::DatasetNotFound),
        other => Some(LoadError::Status(other)),
    }
}

/// レスポンス本文をレコード配列として解析
pub fn parse_salaries(body: &str) -> Result<Vec<SalaryRecord>, LoadError> {
    serde_json::from_str(body).map_err(|e| LoadError::Transport(e.to_string()))
}

/// ステータスと本文から読み込み結果を得る
pub fn interpret_response(status: u16, body: &str) -> Result<Vec<SalaryRecord>, LoadError> {
    if let Some(err) = check_status(status) {
        return Err(err);
    }
    parse_salaries(body)
}
