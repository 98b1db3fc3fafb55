//! User-facing landing page.

use leptos::prelude::*;

use crate::components::user_title::UserTitle;
use crate::config::BotConfig;

/// Landing page shown to bot users. The heading reuses the same display
/// name the document title shows.
#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<BotConfig>();
    let display_name = config.display_name().to_owned();

    view! {
        <UserTitle label="Home"/>
        <div class="home-page">
            <h1 class="home-page__name">{display_name}</h1>
            <p class="home-page__hint">"请通过管理面板管理此机器人。"</p>
        </div>
    }
}
