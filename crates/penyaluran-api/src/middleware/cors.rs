//! CORS layer for the dashboard and upload clients.
//!
//! Each configured list is either the single wildcard `"*"` or explicit
//! values. Entries that fail to parse are skipped with a warning.

use std::str::FromStr;
use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::warn;

use penyaluran_core::config::CorsConfig;

const WILDCARD: &str = "*";

/// Builds a CORS tower layer from configuration.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins = match explicit::<HeaderValue>("origin", &config.allowed_origins) {
        Some(origins) => AllowOrigin::list(origins),
        None => AllowOrigin::any(),
    };
    let methods = match explicit::<Method>("method", &config.allowed_methods) {
        Some(methods) => AllowMethods::list(methods),
        None => AllowMethods::any(),
    };
    let headers = match explicit::<HeaderName>("header", &config.allowed_headers) {
        Some(headers) => AllowHeaders::list(headers),
        None => AllowHeaders::any(),
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(headers)
        .max_age(Duration::from_secs(config.max_age_seconds))
}

/// Parsed values, or `None` when the list contains the wildcard.
fn explicit<T: FromStr>(what: &str, values: &[String]) -> Option<Vec<T>> {
    if values.iter().any(|v| v.trim() == WILDCARD) {
        return None;
    }
    let parsed = values
        .iter()
        .filter_map(|value| match value.trim().parse::<T>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                warn!(kind = what, value = %value, "Ignoring invalid CORS entry");
                None
            }
        })
        .collect();
    Some(parsed)
}
