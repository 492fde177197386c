//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::services::RepositoryService;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Built once when the server starts; every worker gets a cheap clone.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Repository creation service
    pub repositories: Arc<dyn RepositoryService>,
}

impl AppState {
    pub fn new(config: Config, repositories: Arc<dyn RepositoryService>) -> Self {
        Self {
            config: Arc::new(config),
            repositories,
        }
    }

    /// Get gateway configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
