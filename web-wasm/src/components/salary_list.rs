//! 給与一覧コンポーネント

use leptos::prelude::*;
use salary_lookup_common::{ListView, SalaryRecord};

#[component]
pub fn SalaryList<F>(
    #[prop(into)] list: Signal<ListView>,
    on_select: F,
) -> impl IntoView
where
    F: Fn(SalaryRecord) + 'static + Clone + Send + Sync,
{
    view! {
        <div id="salaries-list" class="salaries-list">
            {move || match list.get() {
                ListView::Message(message) => view! { <p>{message.to_string()}</p> }.into_any(),
                ListView::Rows(rows) => rows
                    .into_iter()
                    .map(|row| {
                        let on_select = on_select.clone();
                        let record = row.record.clone();
                        view! {
                            <div
                                class="salary-item"
                                on:click=move |_| on_select(record.clone())
                            >
                                <strong>{row.title}</strong>
                                {format!(" ({} - {}): {}", row.code, row.label, row.salary)}
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}
