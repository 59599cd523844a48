//! 読み込み・解析の実行（スピナー表示付き）
//!
//! 状態遷移は SessionState、通信は BackendClient が担当する。

use crate::client::BackendClient;
use indicatif::{ProgressBar, ProgressStyle};
use salary_lookup_common::analysis::LOADING_MESSAGE;
use salary_lookup_common::{ListMessage, SessionState};
use std::time::Duration;

fn spinner(message: String, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// 一覧を読み込んでセッションに反映
pub async fn load(session: &mut SessionState, client: &BackendClient, show_progress: bool) {
    let ticket = session.begin_load();
    let pb = spinner(ListMessage::Loading.to_string(), show_progress);
    let outcome = client.load_salaries().await;
    pb.finish_and_clear();

    session.finish_load(ticket, outcome);
}

/// 選択中の職種のAI解析を実行
///
/// 職名がない場合は警告のみでリクエストしない。
pub async fn analyze(
    session: &mut SessionState,
    client: &BackendClient,
    show_progress: bool,
) {
    let Some(ticket) = session.begin_analysis() else {
        return;
    };
    let pb = spinner(LOADING_MESSAGE.to_string(), show_progress);
    let outcome = client.analyze_position(&ticket.job_title).await;
    pb.finish_and_clear();

    session.finish_analysis(ticket, outcome);
}
