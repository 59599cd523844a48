//! 職種コード（略号）の正式名称変換
//!
//! 給与表に記載される略号を表示用の名称へ変換する。
//! 表にないコードはそのまま返す。

/// 欠損値のプレースホルダ
pub const NOT_AVAILABLE: &str = "N/A";

/// 略号と正式名称の対応表（大文字小文字を区別）
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    ("TONC", "Trabajador en Ocupación No Calificada"),
    ("TOSC", "Trabajador en Ocupación Semicalificada"),
    ("TOC", "Trabajador en Ocupación Calificada"),
    ("TOE", "Trabajador en Ocupación Especializada"),
    ("TES", "Trabajador de Especialización Superior"),
    ("TONCG", "Trabajador en Ocupación No Calificada (Genérico)"),
    ("TOSCG", "Trabajador en Ocupación Semicalificada (Genérico)"),
    ("TOCG", "Trabajador en Ocupación Calificada (Genérico)"),
    ("TMED", "Técnico Medio en Educación Diversificada"),
    ("TOEG", "Trabajador en Ocupación Especializada (Genérico)"),
    ("TEdS", "Técnico de Educación Superior"),
    ("DES", "Diplomado de Educación Superior"),
    ("Bach", "Bachiller Universitario"),
    ("Lic", "Licenciado Universitario"),
];

/// 既知のコードなら正式名称を返す
pub fn lookup(code: &str) -> Option<&'static str> {
    ABBREVIATIONS
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, label)| *label)
}

/// コードを表示用ラベルへ変換
///
/// 1. 対応表にあれば正式名称
/// 2. なければコードそのもの
/// 3. コードが空/欠損なら "N/A"
pub fn resolve(code: Option<&str>) -> &str {
    match code {
        Some(c) if !c.is_empty() => lookup(c).unwrap_or(c),
        _ => NOT_AVAILABLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        for (code, label) in ABBREVIATIONS {
            assert_eq!(resolve(Some(code)), *label);
        }
        assert_eq!(resolve(Some("Bach")), "Bachiller Universitario");
    }

    #[test]
    fn test_unknown_code_returns_itself() {
        assert_eq!(resolve(Some("XYZ")), "XYZ");
        // 大文字小文字は区別する
        assert_eq!(resolve(Some("tonc")), "tonc");
    }

    #[test]
    fn test_absent_code() {
        assert_eq!(resolve(None), "N/A");
        assert_eq!(resolve(Some("")), "N/A");
    }
}
