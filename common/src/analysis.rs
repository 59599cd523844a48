//! AI解析（/analyze_position）のリクエストとレスポンス解釈
//!
//! 処理の流れ:
//! 1. 職名をJSONで送信（AnalyzeRequest）
//! 2. 失敗ステータス → 本文の `error` を取り出して AnalysisError::Server
//! 3. 成功ステータス → `success` で分岐し AnalysisReport か AnalysisError::Rejected

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::Result;

/// 見出しに職名がない場合の代替
pub const FALLBACK_TITLE: &str = "Puesto";
/// 解析本文がない場合の代替
pub const FALLBACK_TEXT: &str = "No se recibió texto de análisis.";
/// 失敗理由がない場合の代替
pub const FALLBACK_ERROR: &str = "Error desconocido en la respuesta del servidor.";
/// 職名が特定できない場合の警告
pub const MISSING_TITLE_WARNING: &str = "No se pudo determinar el puesto a analizar.";
/// 解析中の表示
pub const LOADING_MESSAGE: &str = "Solicitando análisis a la IA...";

/// 解析リクエスト
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub job_title: String,
}

impl AnalyzeRequest {
    pub fn new(job_title: &str) -> Self {
        Self {
            job_title: job_title.to_string(),
        }
    }

    /// リクエスト本文（JSON）
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// 解析レスポンス
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub job_title: Option<String>,
    pub analysis_text: Option<String>,
    pub error: Option<String>,
    /// サーバー側の例外詳細（ログ用）
    pub detail: Option<String>,
}

/// 解析失敗
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// 失敗ステータス
    #[error("Error al conectar o procesar la respuesta de la IA: Error del servidor: {status} - {detail}")]
    Server { status: u16, detail: String },

    /// success: false
    #[error("Error en el análisis IA: {0}")]
    Rejected(String),

    /// 通信エラー・解析エラー
    #[error("Error al conectar o procesar la respuesta de la IA: {0}")]
    Connection(String),
}

/// 解析結果
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub job_title: String,
    /// Markdown本文
    pub text: String,
}

impl AnalysisReport {
    /// 見出し: `Análisis IA para "職名"`
    pub fn heading(&self) -> String {
        format!("Análisis IA para \"{}\"", self.job_title)
    }

    /// 本文をHTMLに変換
    pub fn body_html(&self, renderer: &impl MarkdownRenderer) -> String {
        renderer.to_html(&self.text)
    }
}

/// Markdown → HTML 変換（実装はフロントエンド側）
pub trait MarkdownRenderer {
    fn to_html(&self, markdown: &str) -> String;
}

/// 変換器が使えない場合のプレーンテキスト表示
pub struct PlainTextRenderer;

impl MarkdownRenderer for PlainTextRenderer {
    fn to_html(&self, markdown: &str) -> String {
        format!("<pre>{}</pre>", escape_html(markdown))
    }
}

/// HTML特殊文字のエスケープ
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// 失敗ステータスの本文からエラーを作る
///
/// JSONの `error` があればそれを、なければ本文をそのまま詳細にする。
pub fn failure_from_body(status: u16, body: &str) -> AnalysisError {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.as_str())
                .filter(|e| !e.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string());

    AnalysisError::Server { status, detail }
}

/// 成功ステータスの本文を解釈
pub fn report_from_body(body: &str) -> std::result::Result<AnalysisReport, AnalysisError> {
    let response: AnalyzeResponse =
        serde_json::from_str(body).map_err(|e| AnalysisError::Connection(e.to_string()))?;
    report_from_response(response)
}

pub fn report_from_response(
    response: AnalyzeResponse,
) -> std::result::Result<AnalysisReport, AnalysisError> {
    if !response.success {
        let reason = response
            .error
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| FALLBACK_ERROR.to_string());
        return Err(AnalysisError::Rejected(reason));
    }

    Ok(AnalysisReport {
        job_title: response
            .job_title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| FALLBACK_TITLE.to_string()),
        text: response
            .analysis_text
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| FALLBACK_TEXT.to_string()),
    })
}

/// ステータスと本文から解析結果を得る
pub fn interpret_response(
    status: u16,
    body: &str,
) -> std::result::Result<AnalysisReport, AnalysisError> {
    if !(200..=299).contains(&status) {
        return Err(failure_from_body(status, body));
    }
    report_from_body(body)
}
