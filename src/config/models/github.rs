//! GitHub client configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Settings for the outbound GitHub client
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct GithubConfig {
    /// REST API base URL
    #[serde(default = "default_github_api_base")]
    pub api_base: String,
    /// Transport timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User-Agent header value
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Access token, only ever read from the environment
    #[serde(skip)]
    pub access_token: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base: default_github_api_base(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
            access_token: String::new(),
        }
    }
}

impl GithubConfig {
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn has_access_token(&self) -> bool {
        !self.access_token.is_empty()
    }
}

impl fmt::Debug for GithubConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GithubConfig")
            .field("api_base", &self.api_base)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field(
                "access_token",
                &if self.has_access_token() { "<redacted>" } else { "<empty>" },
            )
            .finish()
    }
}
