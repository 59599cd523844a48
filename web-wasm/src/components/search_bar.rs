//! 検索バーコンポーネント

use leptos::prelude::*;

#[component]
pub fn SearchBar<F>(on_search: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone,
{
    view! {
        <div class="search-bar">
            <input
                type="text"
                id="search-input"
                placeholder="Buscar por puesto, código, significado o salario..."
                on:input=move |ev| on_search(event_target_value(&ev))
            />
        </div>
    }
}
