//! Utility modules for the gateway
//!
//! - **error**: the infrastructure error type and the caller-facing `ApiError`

pub mod error;
