//! HTTP route modules

pub mod repositories;

use crate::utils::error::ApiError;
use actix_web::web;
use tracing::debug;

/// Message returned when a request body is not the expected JSON
pub const INVALID_JSON_BODY: &str = "invalid json body";

/// JSON extractor settings shared by every route
///
/// Malformed or oversized bodies become a 400 [`ApiError`].
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, req| {
            debug!("Rejected body for {}: {}", req.path(), err);
            ApiError::bad_request(INVALID_JSON_BODY).into()
        })
}
