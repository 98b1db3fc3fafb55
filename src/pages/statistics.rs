//! Chat statistics page (placeholder feature).

#[cfg(test)]
#[path = "statistics_test.rs"]
mod statistics_test;

use leptos::prelude::*;

use crate::components::admin_title::AdminTitle;
use crate::components::not_implemented::NotImplemented;
use crate::components::page_header::PageHeader;
use crate::components::page_loading::PageLoading;
use crate::state::chats::ChatsState;

/// Which placeholder the statistics body shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatisticsBody {
    Loading,
    NotImplemented,
}

/// Select the body for the current store state. A store that has not
/// loaded yet (including a fresh default store) shows the loading
/// placeholder.
pub fn statistics_body(is_loaded: bool) -> StatisticsBody {
    if is_loaded {
        StatisticsBody::NotImplemented
    } else {
        StatisticsBody::Loading
    }
}

/// Statistics page — shows the loading placeholder until the chat store
/// has loaded, then the not-implemented notice. This page never writes
/// the store.
#[component]
pub fn StatisticsPage() -> impl IntoView {
    let chats = expect_context::<RwSignal<ChatsState>>();

    view! {
        <AdminTitle label="数据统计"/>
        <PageHeader title="数据统计"/>
        {move || match statistics_body(chats.get().is_loaded) {
            StatisticsBody::Loading => view! { <PageLoading/> }.into_any(),
            StatisticsBody::NotImplemented => view! { <NotImplemented/> }.into_any(),
        }}
    }
}
