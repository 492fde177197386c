//! # repo-gateway
//!
//! HTTP gateway that creates private GitHub repositories for the account
//! behind a personal access token, one at a time or as a concurrent batch.
//!
//! ## Features
//!
//! - **Single creation**: validate a name and create one repository
//! - **Batch creation**: fan out one task per request and collect every
//!   outcome, with an optional concurrency limit
//! - **Status aggregation**: 201 when everything succeeded, 206 for mixed
//!   outcomes, the first failure's status when nothing did
//!
//! ## Gateway Mode
//!
//! ```rust,no_run
//! use repo_gateway::{Config, Gateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config/gateway.yaml").await?;
//!     let gateway = Gateway::new(config).await?;
//!     gateway.run().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Library use
//!
//! ```rust,no_run
//! use repo_gateway::{Config, CreateRepoRequest, ReposService, RepositoryService};
//!
//! # async fn run() -> repo_gateway::Result<()> {
//! let config = Config::load("config/gateway.yaml").await?;
//! let service = ReposService::from_config(&config)?;
//! let response = service
//!     .create_repos(vec![
//!         CreateRepoRequest::new("first", ""),
//!         CreateRepoRequest::new("second", ""),
//!     ])
//!     .await;
//! println!("{} created", response.success_count());
//! # Ok(())
//! # }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod services;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::batch::{BatchCoordinator, BatchOutcome, derive_status};
pub use core::providers::{GithubProvider, RepositoryProvider};
pub use core::repositories::{
    CreateRepoRequest, CreateRepoResponse, CreateReposResponse, CreateReposResult,
};
pub use services::{ReposService, RepositoryService};
pub use utils::error::{ApiError, GatewayError, Result};

use tracing::info;

/// The gateway: configuration plus the HTTP server built from it
pub struct Gateway {
    config: Config,
    server: server::HttpServer,
}

impl Gateway {
    /// Create a new gateway instance
    pub async fn new(config: Config) -> Result<Self> {
        info!("Creating new gateway instance");

        let server = server::HttpServer::new(&config).await?;

        Ok(Self { config, server })
    }

    /// Run the gateway server
    pub async fn run(self) -> Result<()> {
        info!("Starting repo-gateway");
        // GithubConfig's Debug impl redacts the access token.
        info!("Configuration: {:#?}", self.config);

        self.server.start().await?;

        Ok(())
    }
}

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Gateway build information, reported by `/health`
#[derive(Debug, Clone, serde::Serialize)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp, seconds since the epoch
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
