//! Error handling for the Gateway
//!
//! Two layers live here: [`GatewayError`] for infrastructure failures
//! (configuration, server startup, I/O) and [`ApiError`] for the per-request
//! status/message pairs that flow back to callers and into batch results.

#![allow(missing_docs)]

mod api_error;
mod helpers;
mod response;
mod types;

pub use api_error::ApiError;
pub use types::{GatewayError, Result};
