//! Custom Axum extractors.

mod user_json;

pub use user_json::*;
