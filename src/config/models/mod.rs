//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

#![allow(missing_docs)]

pub mod batch;
pub mod gateway;
pub mod github;
pub mod server;

// Re-export all configuration types
pub use batch::*;
pub use gateway::*;
pub use github::*;
pub use server::*;

/// Environment variable holding the GitHub access token
pub const ENV_GITHUB_ACCESS_TOKEN: &str = "SECRET_GITHUB_ACCESS_TOKEN";

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    1024 * 1024 // 1MB
}

/// Default GitHub REST API base
pub fn default_github_api_base() -> String {
    "https://api.github.com".to_string()
}

/// Default User-Agent sent to GitHub
pub fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
