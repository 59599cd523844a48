//! バックエンドAPI連携（fetch）
//!
//! - GET  /salaries          給与一覧
//! - POST /analyze_position  AI解析
//!
//! レスポンスの判定は salary_lookup_common 側で行う。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use salary_lookup_common::{
    analysis, load, AnalysisError, AnalysisReport, AnalyzeRequest, Endpoints, LoadError,
    SalaryRecord,
};

/// JSの例外値を表示用メッセージに変換
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

/// リクエスト送信（共通処理）: (ステータス, 本文) を返す
async fn fetch_text(request: &Request) -> Result<(u16, String), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let body = JsFuture::from(resp.text()?).await?;
    Ok((resp.status(), body.as_string().unwrap_or_default()))
}

async fn get_salaries(url: &str) -> Result<(u16, String), JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts)?;
    fetch_text(&request).await
}

async fn post_analysis(url: &str, body: &str) -> Result<(u16, String), JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;
    fetch_text(&request).await
}

/// 給与一覧を取得
pub async fn load_salaries(endpoints: &Endpoints) -> Result<Vec<SalaryRecord>, LoadError> {
    match get_salaries(&endpoints.salaries()).await {
        Ok((status, body)) => load::interpret_response(status, &body),
        Err(e) => Err(LoadError::Transport(js_error_message(&e))),
    }
}

/// 職名のAI解析を依頼
pub async fn analyze_position(
    endpoints: &Endpoints,
    job_title: &str,
) -> Result<AnalysisReport, AnalysisError> {
    let body = AnalyzeRequest::new(job_title)
        .to_json()
        .map_err(|e| AnalysisError::Connection(e.to_string()))?;

    match post_analysis(&endpoints.analyze(), &body).await {
        Ok((status, text)) => analysis::interpret_response(status, &text),
        Err(e) => Err(AnalysisError::Connection(js_error_message(&e))),
    }
}
