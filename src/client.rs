//! バックエンドAPIクライアント（reqwest）
//!
//! レスポンスの判定は salary_lookup_common の load / analysis に任せ、
//! ここでは送受信とログ出力のみ行う。

use crate::error::Result;
use salary_lookup_common::{
    analysis, load, AnalysisError, AnalysisReport, AnalyzeRequest, Endpoints, LoadError,
    SalaryRecord,
};
use std::time::Duration;

pub struct BackendClient {
    http: reqwest::Client,
    endpoints: Endpoints,
    verbose: bool,
}

impl BackendClient {
    pub fn new(endpoints: Endpoints, timeout_seconds: u64, verbose: bool) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;
        Ok(Self::with_http(http, endpoints, verbose))
    }

    /// 構築済みのreqwestクライアントを使う
    pub fn with_http(http: reqwest::Client, endpoints: Endpoints, verbose: bool) -> Self {
        Self {
            http,
            endpoints,
            verbose,
        }
    }

    /// GET /salaries
    pub async fn load_salaries(&self) -> std::result::Result<Vec<SalaryRecord>, LoadError> {
        let url = self.endpoints.salaries();
        if self.verbose {
            eprintln!("  GET {}", url);
        }

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;

        if self.verbose {
            eprintln!("  status: {} ({} bytes)", status, body.len());
        }

        let records = load::interpret_response(status, &body)?;
        if self.verbose {
            eprintln!("  Datos cargados: {} registros", records.len());
        }
        Ok(records)
    }

    /// POST /analyze_position
    pub async fn analyze_position(
        &self,
        job_title: &str,
    ) -> std::result::Result<AnalysisReport, AnalysisError> {
        let url = self.endpoints.analyze();
        if self.verbose {
            eprintln!("  POST {} ({})", url, job_title);
        }

        let response = self
            .http
            .post(&url)
            .json(&AnalyzeRequest::new(job_title))
            .send()
            .await
            .map_err(|e| AnalysisError::Connection(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AnalysisError::Connection(e.to_string()))?;

        if self.verbose {
            eprintln!("  status: {} ({} bytes)", status, body.len());
            if let Ok(parsed) = serde_json::from_str::<analysis::AnalyzeResponse>(&body) {
                if let Some(detail) = parsed.detail {
                    eprintln!("  detail: {}", detail);
                }
            }
        }

        analysis::interpret_response(status, &body)
    }
}
