//! Integration tests for repo-gateway
//!
//! These tests drive the public API against a mocked GitHub server.

pub mod error_handling_tests;
pub mod http_api_tests;
pub mod repository_service_tests;
