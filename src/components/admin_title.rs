//! Document title for admin pages.

#[cfg(test)]
#[path = "admin_title_test.rs"]
mod admin_title_test;

use leptos::prelude::*;
use leptos_meta::Title;

/// Suffix appended to every admin page title.
const ADMIN_TITLE_SUFFIX: &str = "Mini Admin";

/// Format the document title for an admin page.
pub fn admin_title(label: &str) -> String {
    format!("{label} - {ADMIN_TITLE_SUFFIX}")
}

/// Declarative document title for admin pages.
///
/// Renders no markup of its own; the title is reconciled into the document
/// head by the meta context, and the last committed render wins.
#[component]
pub fn AdminTitle(#[prop(into)] label: TextProp) -> impl IntoView {
    let text = move || admin_title(&label.get());

    view! { <Title text=text/> }
}
