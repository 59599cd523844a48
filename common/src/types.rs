//! 給与レコードの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - SalaryRecord: `/salaries` が返す1件分（職名・コード・給与）
//! - SalaryRow: 一覧表示用に整形済みの1行

use serde::{Deserialize, Serialize};

use crate::abbreviation::{resolve, NOT_AVAILABLE};
use crate::format::CurrencyFormat;

/// 給与レコード
///
/// キー名はデータセットの列名（Puesto/Codigo/Salario）。
/// 欠損値は読み込み時には埋めず、表示時にプレースホルダへ置き換える。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryRecord {
    #[serde(rename = "Puesto", alias = "title")]
    pub title: Option<String>,        // 職名

    #[serde(rename = "Codigo", alias = "code")]
    pub code: Option<String>,         // 職種コード（略号）

    #[serde(rename = "Salario", alias = "salary")]
    pub salary: Option<f64>,          // 月額給与
}

impl SalaryRecord {
    pub fn new(title: &str, code: &str, salary: f64) -> Self {
        Self {
            title: Some(title.to_string()),
            code: Some(code.to_string()),
            salary: Some(salary),
        }
    }

    /// 表示用の職名（空なら "N/A"）
    pub fn display_title(&self) -> &str {
        non_empty(self.title.as_deref()).unwrap_or(NOT_AVAILABLE)
    }

    /// 表示用のコード（空なら "N/A"）
    pub fn display_code(&self) -> &str {
        non_empty(self.code.as_deref()).unwrap_or(NOT_AVAILABLE)
    }

    /// コードの正式名称
    pub fn label(&self) -> &str {
        resolve(self.code.as_deref())
    }

    /// 表示用の給与（欠損は0）
    pub fn display_salary(&self) -> f64 {
        self.salary.unwrap_or(0.0)
    }

    /// 解析対象の職名。空の場合はNone
    pub fn analysis_title(&self) -> Option<&str> {
        non_empty(self.title.as_deref())
    }
}

/// 一覧の1行
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryRow {
    pub record: SalaryRecord,
    pub title: String,
    pub code: String,
    pub label: String,
    pub salary: String,
}

impl SalaryRow {
    pub fn from_record(record: &SalaryRecord, format: &CurrencyFormat) -> Self {
        Self {
            record: record.clone(),
            title: record.display_title().to_string(),
            code: record.display_code().to_string(),
            label: record.label().to_string(),
            salary: format.format(record.display_salary()),
        }
    }

    /// 一覧の表示文字列: `職名 (コード - 正式名称): 給与`
    pub fn summary(&self) -> String {
        format!("{} ({} - {}): {}", self.title, self.code, self.label, self.salary)
    }
}

/// 詳細パネルの表示内容
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub title: String,
    pub code: String,
    pub label: String,
    pub salary: String,
}

impl DetailView {
    pub fn from_record(record: &SalaryRecord, format: &CurrencyFormat) -> Self {
        let row = SalaryRow::from_record(record, format);
        Self {
            title: row.title,
            code: row.code,
            label: row.label,
            salary: row.salary,
        }
    }

    /// (見出し, 値) の組
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("Puesto", self.title.as_str()),
            ("Código", self.code.as_str()),
            ("Significado", self.label.as_str()),
            ("Salario", self.salary.as_str()),
        ]
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
