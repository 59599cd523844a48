use crate::error::{Result, SalaryLookupError};
use salary_lookup_common::{CurrencyFormat, Endpoints};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// ベースURLを上書きする環境変数
pub const URL_ENV_VAR: &str = "SALARY_LOOKUP_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub currency: CurrencyFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".into(),  // Flask開発サーバー
            timeout_seconds: 60,
            currency: CurrencyFormat::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| SalaryLookupError::Config("No se encontró el directorio personal".into()))?;
        Ok(home.join(".config").join("salary-lookup").join("config.json"))
    }

    /// 有効なベースURL（--url > 環境変数 > 設定ファイル）
    pub fn effective_base_url(&self, override_url: Option<&str>) -> String {
        if let Some(url) = override_url {
            return url.to_string();
        }
        match std::env::var(URL_ENV_VAR) {
            Ok(url) if !url.trim().is_empty() => url,
            _ => self.base_url.clone(),
        }
    }

    pub fn endpoints(&self, override_url: Option<&str>) -> Result<Endpoints> {
        Ok(Endpoints::new(&self.effective_base_url(override_url))?)
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        // 保存前に検証
        Endpoints::new(&url)?;
        self.base_url = url;
        self.save()
    }
}
