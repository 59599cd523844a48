//! バックエンドのエンドポイント

use crate::error::{Error, Result};

/// 給与一覧
pub const SALARIES_PATH: &str = "/salaries";
/// AI解析
pub const ANALYZE_PATH: &str = "/analyze_position";

/// ベースURLから各エンドポイントのURLを組み立てる
///
/// ベースURLが空ならページと同一オリジンの相対パスになる。
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Result<Self> {
        let base = base_url.trim().trim_end_matches('/');
        if !base.is_empty() && !base.starts_with("http://") && !base.starts_with("https://") {
            return Err(Error::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self {
            base_url: base.to_string(),
        })
    }

    /// 同一オリジン（ブラウザ用）
    pub fn same_origin() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn salaries(&self) -> String {
        format!("{}{}", self.base_url, SALARIES_PATH)
    }

    pub fn analyze(&self) -> String {
        format!("{}{}", self.base_url, ANALYZE_PATH)
    }
}
