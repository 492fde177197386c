//! Main gateway configuration

#![allow(missing_docs)]

use super::*;
use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Main gateway configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GatewayConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// GitHub client configuration
    #[serde(default)]
    pub github: GithubConfig,
    /// Batch coordinator configuration
    #[serde(default)]
    pub batch: BatchConfig,
}

impl GatewayConfig {
    /// Override fields from an environment lookup.
    ///
    /// A missing access token leaves the credential empty; GitHub rejects it
    /// later with 401.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("GATEWAY_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("GATEWAY_PORT") {
            self.server.port = parse_env("GATEWAY_PORT", &port)?;
        }
        if let Some(workers) = lookup("GATEWAY_WORKERS") {
            self.server.workers = Some(parse_env("GATEWAY_WORKERS", &workers)?);
        }

        if let Some(api_base) = lookup("GITHUB_API_BASE") {
            self.github.api_base = api_base;
        }
        if let Some(timeout) = lookup("GITHUB_TIMEOUT") {
            self.github.timeout = parse_env("GITHUB_TIMEOUT", &timeout)?;
        }
        self.github.access_token = lookup(ENV_GITHUB_ACCESS_TOKEN).unwrap_or_default();

        if let Some(limit) = lookup("BATCH_MAX_CONCURRENCY") {
            self.batch.max_concurrency = Some(parse_env("BATCH_MAX_CONCURRENCY", &limit)?);
        }

        Ok(())
    }
}

fn parse_env<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| GatewayError::Config(format!("Invalid {}: {}", key, e)))
}
