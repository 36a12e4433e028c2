//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod schemas;
pub mod sign_in;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::{ApiResult, json_error_handler};

use actix_web::web;

/// JSON extractor configuration shared by every JSON endpoint.
///
/// Malformed bodies are answered with the domain error envelope instead of
/// Actix's plain-text default.
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}
