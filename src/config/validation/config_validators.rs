//! Validators for each configuration section

use super::trait_def::Validate;
use crate::config::models::*;
use tokio::sync::Semaphore;
use tracing::debug;
use url::Url;

impl Validate for GatewayConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating gateway configuration");

        self.server
            .validate()
            .map_err(|e| format!("Server config error: {}", e))?;
        self.github
            .validate()
            .map_err(|e| format!("GitHub config error: {}", e))?;
        self.batch
            .validate()
            .map_err(|e| format!("Batch config error: {}", e))?;

        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Port cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            return Err("Max body size cannot be 0".to_string());
        }

        if let Some(0) = self.workers {
            return Err("Worker count cannot be 0".to_string());
        }

        Ok(())
    }
}

impl Validate for GithubConfig {
    fn validate(&self) -> Result<(), String> {
        if self.api_base.is_empty() {
            return Err("API base URL cannot be empty".to_string());
        }

        let url = Url::parse(&self.api_base)
            .map_err(|e| format!("API base has invalid URL format: {}", e))?;
        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(format!(
                    "API base must use http:// or https:// scheme, got: {}",
                    scheme
                ));
            }
        }

        if self.timeout == 0 {
            return Err("Timeout cannot be 0".to_string());
        }

        if self.user_agent.trim().is_empty() {
            return Err("User agent cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Validate for BatchConfig {
    fn validate(&self) -> Result<(), String> {
        match self.max_concurrency {
            Some(0) => Err("max_concurrency must be at least 1 when set".to_string()),
            Some(limit) if limit > Semaphore::MAX_PERMITS => Err(format!(
                "max_concurrency cannot exceed {}",
                Semaphore::MAX_PERMITS
            )),
            _ => Ok(()),
        }
    }
}
