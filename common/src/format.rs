//! 通貨フォーマット
//!
//! 給与額を `¢350,000.50` 形式（小数2桁・3桁区切り）で表示する。

use serde::{Deserialize, Serialize};

/// 通貨表示設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    /// 通貨記号（コロン）
    pub symbol: String,
    /// 3桁区切り
    pub grouping: char,
    /// 小数点
    pub decimal: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "¢".into(),
            grouping: ',',
            decimal: '.',
        }
    }
}

impl CurrencyFormat {
    /// 金額を通貨表記に変換（非有限値は0扱い）
    pub fn format(&self, amount: f64) -> String {
        let amount = if amount.is_finite() { amount } else { 0.0 };
        let fixed = format!("{:.2}", amount.abs());
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, digit) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(self.grouping);
            }
            grouped.push(digit);
        }

        // "-0.00" にはしない
        let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
        format!("{}{}{}{}{}", self.symbol, sign, grouped, self.decimal, frac_part)
    }

    /// 検索語を給与文字列との照合用に正規化（小文字化込み）
    ///
    /// 通貨記号を除去する。最後の区切り文字の後ろが1〜2桁で終わる場合は
    /// 小数点として '.' にし、それ以外の区切りは除去する。
    /// 小数部の末尾の0は落とす（"350000.50" → "350000.5"）。
    pub fn normalize_query(&self, query: &str) -> String {
        let mut term = query.to_lowercase();
        if !self.symbol.is_empty() {
            term = term.replace(&self.symbol.to_lowercase(), "");
        }

        let is_separator =
            |c: char| c == ',' || c == '.' || c == self.grouping || c == self.decimal;

        let decimal_at = term
            .char_indices()
            .rev()
            .find(|(_, c)| is_separator(*c))
            .filter(|(i, c)| {
                let tail = &term[i + c.len_utf8()..];
                (1..=2).contains(&tail.len()) && tail.bytes().all(|b| b.is_ascii_digit())
            })
            .map(|(i, _)| i);

        let mut normalized = String::with_capacity(term.len());
        for (i, c) in term.char_indices() {
            if Some(i) == decimal_at {
                normalized.push('.');
            } else if !is_separator(c) {
                normalized.push(c);
            }
        }

        if decimal_at.is_some() {
            let trimmed = normalized.trim_end_matches('0').trim_end_matches('.').len();
            normalized.truncate(trimmed);
        }
        normalized
    }
}

/// 検索用の給与文字列（区切りなし）。欠損・0は空文字
pub fn plain_salary(salary: Option<f64>) -> String {
    match salary {
        Some(s) if s != 0.0 && !s.is_nan() => s.to_string(),
        _ => String::new(),
    }
}
