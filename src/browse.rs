//! 対話式ブラウズ
//!
//! 検索語入力 → 一覧から選択 → 詳細表示 → AI解析（確認後）を繰り返す。

use crate::client::BackendClient;
use crate::display::{analysis_text, detail_text, list_text};
use crate::error::Result;
use crate::workflow;
use dialoguer::{Confirm, Input, Select};
use salary_lookup_common::{ListView, SessionState};

/// 一覧の後に付ける操作
pub enum BrowseAction {
    /// 行を選択
    Select(usize),
    /// 検索し直す
    NewSearch,
    /// 一覧を再読み込み
    Reload,
    /// 終了
    Quit,
}

/// 選択肢の番号を操作に変換
pub fn action_for(index: Option<usize>, row_count: usize) -> BrowseAction {
    match index {
        Some(i) if i < row_count => BrowseAction::Select(i),
        Some(i) if i == row_count => BrowseAction::NewSearch,
        Some(i) if i == row_count + 1 => BrowseAction::Reload,
        _ => BrowseAction::Quit,
    }
}

pub async fn run_browse(session: &mut SessionState, client: &BackendClient) -> Result<()> {
    workflow::load(session, client, true).await;

    loop {
        if let ListView::Message(message) = session.list() {
            println!("{}", message);
        }

        let query: String = Input::new()
            .with_prompt("Buscar (vacío = todos)")
            .allow_empty(true)
            .interact_text()?;
        session.search(query.trim());

        let rows = session.list().rows().to_vec();
        if rows.is_empty() {
            println!("{}\n", list_text(session.list()));
        }

        let mut items: Vec<String> = rows.iter().map(|r| r.summary()).collect();
        items.push("🔍 Nueva búsqueda".into());
        items.push("↻ Recargar datos".into());
        items.push("✖ Salir".into());

        let choice = Select::new()
            .with_prompt(format!("{} resultado(s)", rows.len()))
            .items(&items)
            .default(0)
            .interact_opt()?;

        match action_for(choice, rows.len()) {
            BrowseAction::Select(i) => {
                session.select(rows[i].record.clone());
                if let Some(detail) = session.detail() {
                    println!("\n{}", detail_text(&detail));
                }

                let wants_analysis = Confirm::new()
                    .with_prompt("¿Solicitar análisis IA de este puesto?")
                    .default(false)
                    .interact()?;
                if wants_analysis {
                    workflow::analyze(session, client, true).await;
                    if let Some(text) = analysis_text(session.analysis()) {
                        println!("\n{}\n", text);
                    }
                }
            }
            BrowseAction::NewSearch => continue,
            BrowseAction::Reload => workflow::load(session, client, true).await,
            BrowseAction::Quit => break,
        }
    }

    Ok(())
}
