//! HTTP helpers for talking to the bot backend.

pub mod api;
