//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_server function for automatic configuration loading.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{GatewayError, Result};
use tracing::info;

/// Configuration file read by [`run_server`]
pub const DEFAULT_CONFIG_PATH: &str = "config/gateway.yaml";

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| GatewayError::config("Configuration is required"))?;

        HttpServer::new(&config).await
    }
}

/// Load configuration from [`DEFAULT_CONFIG_PATH`] and the environment, then serve
pub async fn run_server() -> Result<()> {
    info!("Starting repo-gateway {}", crate::VERSION);
    info!("Loading configuration from {} and environment", DEFAULT_CONFIG_PATH);

    let config = Config::load(DEFAULT_CONFIG_PATH).await?;

    let server = ServerBuilder::new().with_config(config.clone()).build().await?;
    info!("Server starting at: http://{}", config.server().address());
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   POST /repository - Create one repository");
    info!("   POST /repositories - Create repositories concurrently");

    server.start().await
}
