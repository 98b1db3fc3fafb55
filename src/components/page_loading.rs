//! Loading indicator shown while a page's data is in flight.

use leptos::prelude::*;

/// Full-width loading placeholder. Takes no inputs.
#[component]
pub fn PageLoading() -> impl IntoView {
    view! {
        <div class="page-loading">
            <span class="page-loading__spinner"></span>
            <p class="page-loading__text">"加载中..."</p>
        </div>
    }
}
