//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header<F>(on_reload: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <header class="header">
            <h1>"Consulta de Salarios Mínimos"</h1>
            <button
                class="btn btn-secondary btn-small"
                on:click={
                    let on_reload = on_reload.clone();
                    move |_| on_reload(())
                }
            >
                "Recargar"
            </button>
        </header>
    }
}
