//! 端末への表示

use salary_lookup_common::analysis::LOADING_MESSAGE;
use salary_lookup_common::{AnalysisPanel, DetailView, ListView};
use std::fmt::Write;

/// 一覧欄を文字列化（1行1件、またはメッセージ）
pub fn list_text(list: &ListView) -> String {
    match list {
        ListView::Message(message) => message.to_string(),
        ListView::Rows(rows) => rows
            .iter()
            .map(|row| row.summary())
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// 詳細パネルを文字列化
pub fn detail_text(detail: &DetailView) -> String {
    let mut out = String::from("Detalles del Puesto\n");
    for (name, value) in detail.fields() {
        let _ = writeln!(out, "  {}: {}", name, value);
    }
    out
}

/// AI解析欄を文字列化（非表示ならNone）
///
/// 本文はMarkdownのまま出力する。
pub fn analysis_text(panel: &AnalysisPanel) -> Option<String> {
    match panel {
        AnalysisPanel::Hidden => None,
        AnalysisPanel::Loading => Some(LOADING_MESSAGE.to_string()),
        AnalysisPanel::Warning(message) => Some(format!("⚠ {}", message)),
        AnalysisPanel::Failed(err) => Some(format!("✖ {}", err)),
        AnalysisPanel::Report(report) => Some(format!("{}\n\n{}", report.heading(), report.text)),
    }
}
