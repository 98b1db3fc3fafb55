//! Heading block shown at the top of a page body.

use leptos::prelude::*;

/// Page header with the page's display title.
#[component]
pub fn PageHeader(#[prop(into)] title: TextProp) -> impl IntoView {
    view! {
        <header class="page-header">
            <h1 class="page-header__title">{move || title.get().to_string()}</h1>
        </header>
    }
}
