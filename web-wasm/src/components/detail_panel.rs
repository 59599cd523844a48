//! 詳細パネルコンポーネント

use leptos::html::Section;
use leptos::prelude::*;
use salary_lookup_common::{AnalysisPanel, DetailView};

use crate::components::analysis_output::AnalysisOutput;

#[component]
pub fn DetailPanel<F>(
    #[prop(into)] detail: Signal<Option<DetailView>>,
    #[prop(into)] can_analyze: Signal<bool>,
    #[prop(into)] analysis: Signal<AnalysisPanel>,
    section_ref: NodeRef<Section>,
    on_analyze: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    let is_open = move || detail.with(Option::is_some);

    view! {
        <section
            id="details-section"
            class="details-section"
            node_ref=section_ref
            style:display=move || if is_open() { "block" } else { "none" }
        >
            <h2>"Detalles del Puesto"</h2>
            <div id="job-details">
                {move || detail.get().map(|d| {
                    d.fields()
                        .into_iter()
                        .map(|(name, value)| {
                            let value = value.to_string();
                            view! {
                                <p><strong>{format!("{}:", name)}</strong>" "{value}</p>
                            }
                        })
                        .collect_view()
                })}
            </div>

            <button
                id="analyze-button"
                class="btn btn-primary"
                style:display=move || if is_open() { "block" } else { "none" }
                disabled=move || !can_analyze.get()
                on:click={
                    let on_analyze = on_analyze.clone();
                    move |_| on_analyze(())
                }
            >
                "Análisis IA"
            </button>

            <AnalysisOutput analysis=analysis />
        </section>
    }
}
