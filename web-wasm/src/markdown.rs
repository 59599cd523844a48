//! Markdown → HTML 変換（marked.js）
//!
//! ページで読み込まれたグローバルの `marked` を呼ぶ。
//! 未読み込み・例外時はエスケープしたプレーンテキストを表示する。

use wasm_bindgen::prelude::*;
use salary_lookup_common::{MarkdownRenderer, PlainTextRenderer};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = marked, js_name = "parse", catch)]
    fn marked_parse(markdown: &str) -> Result<JsValue, JsValue>;
}

pub struct Marked;

impl MarkdownRenderer for Marked {
    fn to_html(&self, markdown: &str) -> String {
        match marked_parse(markdown) {
            Ok(html) => match html.as_string() {
                Some(html) => html,
                None => PlainTextRenderer.to_html(markdown),
            },
            Err(e) => {
                gloo::console::warn!(
                    "marked.parse no disponible:",
                    crate::api::backend::js_error_message(&e)
                );
                PlainTextRenderer.to_html(markdown)
            }
        }
    }
}
