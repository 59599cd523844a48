//! ブラウザ連携部分のテスト（wasm-pack test --node）

use salary_lookup_common::MarkdownRenderer;
use salary_lookup_wasm::api::backend::js_error_message;
use salary_lookup_wasm::markdown::Marked;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

/// marked が読み込まれていない場合はプレーンテキスト表示
#[wasm_bindgen_test]
fn test_marked_missing_falls_back_to_plain_text() {
    let html = Marked.to_html("**Bueno** <script>");
    assert_eq!(html, "<pre>**Bueno** &lt;script&gt;</pre>");
}

#[wasm_bindgen_test]
fn test_js_error_message_from_error() {
    let err: JsValue = js_sys::Error::new("Failed to fetch").into();
    assert_eq!(js_error_message(&err), "Failed to fetch");
}

#[wasm_bindgen_test]
fn test_js_error_message_from_string() {
    assert_eq!(js_error_message(&JsValue::from_str("timeout")), "timeout");
}
