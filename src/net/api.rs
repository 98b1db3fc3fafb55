//! REST API helpers for communicating with the bot backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None` since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option` outputs instead of panics so a failed fetch
//! degrades UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

use crate::state::chats::ChatSummary;

/// Fetch the chat list from `/api/chats`.
/// Returns `None` on the server or when the request fails.
pub async fn fetch_chats() -> Option<Vec<ChatSummary>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/chats")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<ChatSummary>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
