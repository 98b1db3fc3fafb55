//! Presentational components shared across pages.

pub mod admin_title;
pub mod not_implemented;
pub mod page_header;
pub mod page_loading;
pub mod user_title;
