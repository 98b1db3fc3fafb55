//! Document title for user-facing pages.

#[cfg(test)]
#[path = "user_title_test.rs"]
mod user_title_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::config::BotConfig;

/// Format the document title for a user-facing page.
///
/// The display name follows the config fallback rule: full bot name when
/// non-empty, else the bot first name. Both empty yields an empty segment
/// rather than an error.
pub fn user_title(label: &str, config: &BotConfig) -> String {
    format!("{label} - {}", config.display_name())
}

/// Declarative document title for user-facing pages.
///
/// The bot identity comes from the injected [`BotConfig`] context rather
/// than a page-level global. Same head-reconciliation semantics as the
/// admin title.
#[component]
pub fn UserTitle(#[prop(into)] label: TextProp) -> impl IntoView {
    let config = expect_context::<BotConfig>();
    let text = move || user_title(&label.get(), &config);

    view! { <Title text=text/> }
}
