//! 設定ファイルのテスト

use salary_lookup::config::{Config, URL_ENV_VAR};
use salary_lookup_common::CurrencyFormat;
use tempfile::tempdir;

/// ファイルがなければデフォルト
#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("none.json")).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.base_url, "http://127.0.0.1:5000");
    assert_eq!(config.currency, CurrencyFormat::default());
}

/// 保存と読み込み（親ディレクトリも作成）
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let config = Config {
        base_url: "https://salarios.example.cr".into(),
        timeout_seconds: 15,
        currency: CurrencyFormat {
            symbol: "₡".into(),
            grouping: '.',
            decimal: ',',
        },
    };
    config.save_to(&path).expect("保存失敗");

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

/// 一部の項目だけのファイルは残りをデフォルトで補う
#[test]
fn test_partial_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"base_url": "http://10.0.0.2:5000"}"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.base_url, "http://10.0.0.2:5000");
    assert_eq!(config.timeout_seconds, 60);
    assert_eq!(config.currency.symbol, "¢");
}

/// --url は環境変数・設定ファイルより優先
#[test]
fn test_override_url_wins() {
    let config = Config::default();
    assert_eq!(
        config.effective_base_url(Some("http://override:1")),
        "http://override:1"
    );
    let endpoints = config.endpoints(Some("http://override:1/")).unwrap();
    assert_eq!(endpoints.salaries(), "http://override:1/salaries");
}

/// 優先順位: --url > 環境変数 > 設定ファイル
///
/// 環境変数を書き換えるテストはこの1つにまとめる（並列実行対策）
#[test]
fn test_url_precedence_with_env() {
    let config = Config {
        base_url: "http://from-file:5000".into(),
        ..Default::default()
    };

    std::env::set_var(URL_ENV_VAR, "http://from-env:5000");
    assert_eq!(config.effective_base_url(None), "http://from-env:5000");
    assert_eq!(
        config.effective_base_url(Some("http://from-flag:1")),
        "http://from-flag:1"
    );
    let endpoints = config.endpoints(None).unwrap();
    assert_eq!(endpoints.salaries(), "http://from-env:5000/salaries");

    // 空白だけなら設定ファイルの値
    std::env::set_var(URL_ENV_VAR, "   ");
    assert_eq!(config.effective_base_url(None), "http://from-file:5000");

    std::env::remove_var(URL_ENV_VAR);
    assert_eq!(config.effective_base_url(None), "http://from-file:5000");
}
