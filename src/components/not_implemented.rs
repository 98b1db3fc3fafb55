//! Placeholder for features that are routed but not built yet.

use leptos::prelude::*;

/// Fixed not-implemented notice. Takes no inputs.
#[component]
pub fn NotImplemented() -> impl IntoView {
    view! {
        <div class="not-implemented">
            <p class="not-implemented__text">"此功能尚未实现"</p>
        </div>
    }
}
