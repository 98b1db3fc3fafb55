//! # mini-admin-client
//!
//! Leptos + WASM frontend for the Mini Admin bot interface. Replaces the
//! React admin/user bundles with a single Rust-native UI layer.
//!
//! This crate contains pages, components, the shared chat-store state, the
//! injected bot configuration, and the REST helper for populating the
//! store. An external host serves it: SSR through [`app::shell`] and the
//! `ssr` feature, hydration through [`hydrate`] and the `hydrate` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
