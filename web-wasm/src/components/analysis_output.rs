//! AI解析結果コンポーネント

use leptos::prelude::*;
use salary_lookup_common::analysis::LOADING_MESSAGE;
use salary_lookup_common::AnalysisPanel;

use crate::markdown::Marked;

#[component]
pub fn AnalysisOutput(#[prop(into)] analysis: Signal<AnalysisPanel>) -> impl IntoView {
    view! {
        <div
            id="ai-analysis-result"
            class="ai-analysis-result"
            style:display=move || if analysis.with(AnalysisPanel::is_visible) { "block" } else { "none" }
        >
            {move || match analysis.get() {
                AnalysisPanel::Hidden => ().into_any(),
                AnalysisPanel::Loading => view! { <p>{LOADING_MESSAGE}</p> }.into_any(),
                AnalysisPanel::Warning(message) => {
                    view! { <p style="color: orange;">{message}</p> }.into_any()
                }
                AnalysisPanel::Failed(err) => {
                    view! { <p style="color: red;">{err.to_string()}</p> }.into_any()
                }
                AnalysisPanel::Report(report) => {
                    let html = report.body_html(&Marked);
                    view! {
                        <h3>{report.heading()}</h3>
                        <div class="ai-analysis-content" inner_html=html></div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
