//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::BotConfig;
use crate::pages::{home::HomePage, statistics::StatisticsPage};
use crate::state::chats::ChatsState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the bot config and chat-store contexts and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = BotConfig::from_host_page();
    provide_context(config);

    let chats = RwSignal::new(ChatsState::default());
    provide_context(chats);

    // Populate the chat store once on mount. Pages only read it; the
    // store flips to loaded even when the fetch fails, matching the
    // "loaded, nothing to show" placeholder path.
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            let list = crate::net::api::fetch_chats().await.unwrap_or_default();
            chats.update(|state| {
                state.chats = list;
                state.is_loaded = true;
            });
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/mini-admin.css"/>
        <Title text="Mini Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("statistics") view=StatisticsPage/>
            </Routes>
        </Router>
    }
}
