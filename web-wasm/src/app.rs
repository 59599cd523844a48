//! メインアプリケーションコンポーネント

use leptos::html::Section;
use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo::console::{error, log};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use salary_lookup_common::{Applied, CurrencyFormat, Endpoints, SalaryRecord, SessionState};

use crate::api::backend;
use crate::components::{
    detail_panel::DetailPanel,
    header::Header,
    salary_list::SalaryList,
    search_bar::SearchBar,
};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態
    let session = RwSignal::new(SessionState::new(CurrencyFormat::default()));
    let endpoints = Endpoints::same_origin();
    let details_ref = NodeRef::<Section>::new();

    let list = Memo::new(move |_| session.with(|s| s.list().clone()));
    let detail = Memo::new(move |_| session.with(SessionState::detail));
    let can_analyze = Memo::new(move |_| session.with(SessionState::can_analyze));
    let analysis = Memo::new(move |_| session.with(|s| s.analysis().clone()));

    // 一覧読み込み
    let load = {
        let endpoints = endpoints.clone();
        move |_: ()| {
            let Some(ticket) = session.try_update(SessionState::begin_load) else {
                return;
            };
            let endpoints = endpoints.clone();
            spawn_local(async move {
                let outcome = backend::load_salaries(&endpoints).await;
                match &outcome {
                    Ok(records) => log!(format!("Datos cargados: {} registros", records.len())),
                    Err(e) => error!("Error al cargar los salarios:", e.to_string()),
                }
                session.update(|s| {
                    s.finish_load(ticket, outcome);
                });
            });
        }
    };

    // 検索（入力ごと）
    let on_search = move |query: String| {
        session.update(|s| s.search(&query));
    };

    // 行クリック → 詳細表示
    let on_select = move |record: SalaryRecord| {
        session.update(|s| s.select(record));
        request_animation_frame(move || {
            if let Some(section) = details_ref.get_untracked() {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                section.scroll_into_view_with_scroll_into_view_options(&options);
            }
        });
    };

    // AI解析
    let on_analyze = {
        let endpoints = endpoints.clone();
        move |_: ()| {
            let Some(ticket) = session.try_update(SessionState::begin_analysis).flatten() else {
                return;
            };
            let endpoints = endpoints.clone();
            spawn_local(async move {
                let outcome = backend::analyze_position(&endpoints, &ticket.job_title).await;
                if let Err(e) = &outcome {
                    error!("Error al obtener análisis IA:", e.to_string());
                }
                let applied = session.try_update(|s| s.finish_analysis(ticket, outcome));
                if applied == Some(Applied::Stale) {
                    log!("Análisis descartado: la selección cambió");
                }
            });
        }
    };

    // 初回読み込み
    load(());

    view! {
        <div class="container">
            <Header on_reload=load />

            <SearchBar on_search=on_search />

            <SalaryList list=list on_select=on_select />

            <DetailPanel
                detail=detail
                can_analyze=can_analyze
                analysis=analysis
                section_ref=details_ref
                on_analyze=on_analyze
            />
        </div>
    }
}
