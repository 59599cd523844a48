//! バイナリの出力先テスト

use std::net::TcpListener;
use std::process::Command;
use tempfile::tempdir;

/// 何も待ち受けていないURL
fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind failed");
    let addr = listener.local_addr().expect("no local addr");
    drop(listener);
    format!("http://{}", addr)
}

/// --verbose の診断はstderr、読み込み失敗のメッセージはstdout
#[test]
fn test_verbose_diagnostics_go_to_stderr() {
    let home = tempdir().expect("Failed to create temp dir");
    let url = closed_url();

    let output = Command::new(env!("CARGO_BIN_EXE_salary-lookup"))
        .args(["--verbose", "--url", url.as_str(), "list"])
        .env("HOME", home.path())
        .env_remove("SALARY_LOOKUP_URL")
        .output()
        .expect("failed to run binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(stderr.contains(&format!("Backend: {}", url)), "stderr: {stderr}");
    assert!(stderr.contains("GET "), "stderr: {stderr}");
    assert!(!stdout.contains("Backend:"), "stdout: {stdout}");
    assert!(stdout.contains("Error al cargar los datos: "), "stdout: {stdout}");
}
