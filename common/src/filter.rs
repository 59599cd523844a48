//! 検索フィルタ
//!
//! 職名・コード・正式名称・給与の4項目に対する部分一致（大文字小文字無視）。

use crate::format::{plain_salary, CurrencyFormat};
use crate::types::SalaryRecord;

/// 検索語に一致するレコードを元の順序のまま返す
///
/// 元のリストは変更しない。空の検索語はすべてに一致する。
pub fn filter_records(
    records: &[SalaryRecord],
    query: &str,
    format: &CurrencyFormat,
) -> Vec<SalaryRecord> {
    let term = query.to_lowercase();
    let salary_term = format.normalize_query(query);

    records
        .iter()
        .filter(|r| matches_record(r, &term, &salary_term))
        .cloned()
        .collect()
}

fn matches_record(record: &SalaryRecord, term: &str, salary_term: &str) -> bool {
    let title = record.title.as_deref().unwrap_or_default().to_lowercase();
    let code = record.code.as_deref().unwrap_or_default().to_lowercase();
    let label = record.label().to_lowercase();
    let salary = plain_salary(record.salary);

    title.contains(term)
        || code.contains(term)
        || label.contains(term)
        || salary.contains(salary_term)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<SalaryRecord> {
        vec![
            SalaryRecord::new("Conserje", "TONC", 350000.5),
            SalaryRecord::new("Chofer de Autobús", "TOSC", 410000.0),
            SalaryRecord::new("Contador", "Lic", 950000.0),
            SalaryRecord {
                title: Some("Mensajero".into()),
                code: None,
                salary: None,
            },
        ]
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let records = sample();
        let filtered = filter_records(&records, "", &CurrencyFormat::default());
        assert_eq!(filtered, records);
    }

    #[test]
    fn test_title_case_insensitive() {
        let filtered = filter_records(&sample(), "CONSERJE", &CurrencyFormat::default());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title.as_deref(), Some("Conserje"));
    }

    #[test]
    fn test_matches_code_and_label() {
        let f = CurrencyFormat::default();
        let by_code = filter_records(&sample(), "tosc", &f);
        assert_eq!(by_code.len(), 1);

        let by_label = filter_records(&sample(), "licenciado", &f);
        assert_eq!(by_label.len(), 1);
        assert_eq!(by_label[0].title.as_deref(), Some("Contador"));

        // コード欠損のレコードは "N/A" ラベルで一致する
        let by_placeholder = filter_records(&sample(), "n/a", &f);
        assert_eq!(by_placeholder.len(), 1);
        assert_eq!(by_placeholder[0].title.as_deref(), Some("Mensajero"));
    }

    #[test]
    fn test_matches_salary_plain_and_formatted() {
        let f = CurrencyFormat::default();
        let plain = filter_records(&sample(), "350000", &f);
        assert_eq!(plain.len(), 1);
        assert_eq!(plain[0].title.as_deref(), Some("Conserje"));

        let formatted = filter_records(&sample(), "¢350,000", &f);
        assert_eq!(formatted, plain);
    }

    #[test]
    fn test_matches_salary_with_decimal_comma() {
        let f = CurrencyFormat::default();
        for query in ["350000,5", "350.000,50", "¢350,000", "¢350,000.50", "350000.5"] {
            let filtered = filter_records(&sample(), query, &f);
            assert_eq!(filtered.len(), 1, "query {query:?}");
            assert_eq!(filtered[0].title.as_deref(), Some("Conserje"));
        }

        // ¢410,000.00 → 410000
        let whole = filter_records(&sample(), "410.000,00", &f);
        assert_eq!(whole.len(), 1);
        assert_eq!(whole[0].title.as_deref(), Some("Chofer de Autobús"));
    }

    #[test]
    fn test_uppercase_symbol_is_stripped() {
        let f = CurrencyFormat {
            symbol: "CRC".into(),
            ..Default::default()
        };
        let filtered = filter_records(&sample(), "CRC350000", &f);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title.as_deref(), Some("Conserje"));
    }

    #[test]
    fn test_no_match() {
        let filtered = filter_records(&sample(), "astronauta", &CurrencyFormat::default());
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_every_result_contains_query() {
        let f = CurrencyFormat::default();
        let records = sample();
        for query in ["con", "o", "10", "tonc", "¢9", "ocupación"] {
            let term = query.to_lowercase();
            let salary_term = f.normalize_query(query);
            for r in filter_records(&records, query, &f) {
                let hit = r.title.as_deref().unwrap_or_default().to_lowercase().contains(&term)
                    || r.code.as_deref().unwrap_or_default().to_lowercase().contains(&term)
                    || r.label().to_lowercase().contains(&term)
                    || plain_salary(r.salary).contains(&salary_term);
                assert!(hit, "query {query:?} returned non-matching {r:?}");
            }
        }
    }

    #[test]
    fn test_source_not_mutated() {
        let records = sample();
        let before = records.clone();
        let _ = filter_records(&records, "conserje", &CurrencyFormat::default());
        assert_eq!(records, before);
    }
}
