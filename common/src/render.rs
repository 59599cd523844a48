//! 一覧表示

use std::fmt;

use crate::format::CurrencyFormat;
use crate::types::{SalaryRecord, SalaryRow};

/// 一覧欄に表示するメッセージ
#[derive(Debug, Clone, PartialEq)]
pub enum ListMessage {
    /// 読み込み中
    Loading,
    /// 読み込み成功だが0件
    NoData,
    /// 検索結果が0件
    NoResults,
    /// 読み込み失敗（メッセージは LoadError の表示文字列）
    LoadFailed(String),
}

impl fmt::Display for ListMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListMessage::Loading => write!(f, "Cargando datos..."),
            ListMessage::NoData => write!(f, "No se encontraron datos de salarios."),
            ListMessage::NoResults => {
                write!(f, "No hay resultados que coincidan con la búsqueda.")
            }
            ListMessage::LoadFailed(message) => write!(f, "{}", message),
        }
    }
}

/// 一覧欄の状態
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Message(ListMessage),
    Rows(Vec<SalaryRow>),
}

impl Default for ListView {
    fn default() -> Self {
        ListView::Rows(Vec::new())
    }
}

impl ListView {
    pub fn rows(&self) -> &[SalaryRow] {
        match self {
            ListView::Rows(rows) => rows,
            ListView::Message(_) => &[],
        }
    }

    pub fn message(&self) -> Option<&ListMessage> {
        match self {
            ListView::Message(m) => Some(m),
            ListView::Rows(_) => None,
        }
    }
}

/// レコード列を一覧の行へ変換（入力順を維持、並べ替えなし）
pub fn render_records(records: &[SalaryRecord], format: &CurrencyFormat) -> ListView {
    if records.is_empty() {
        return ListView::Message(ListMessage::NoResults);
    }

    ListView::Rows(
        records
            .iter()
            .map(|r| SalaryRow::from_record(r, format))
            .collect(),
    )
}
