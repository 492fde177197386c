//! GitHub REST client for repository creation

use super::models::{GithubCreateRepoRequest, GithubCreateRepoResponse, GithubErrorResponse};
use super::provider::RepositoryProvider;
use crate::config::GithubConfig;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use tracing::{debug, error};

const CREATE_REPO_PATH: &str = "/user/repos";
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

pub const INVALID_RESPONSE_BODY: &str = "invalid response body";
pub const INVALID_JSON_ERROR_BODY: &str = "invalid json error response body";
pub const INVALID_CREATE_REPO_RESPONSE: &str =
    "error when trying to unmarshal github create repo response";

fn authorization_header(token: &str) -> String {
    format!("token {}", token)
}

/// Talks to `POST /user/repos`
#[derive(Debug, Clone)]
pub struct GithubProvider {
    client: Client,
    api_base: String,
    user_agent: String,
}

impl GithubProvider {
    /// Create a provider from configuration
    pub fn new(config: &GithubConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout_duration())
            .build()?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            user_agent: config.user_agent.clone(),
        })
    }

    /// Create a provider pointed at another API base
    pub fn with_base_url<S: Into<String>>(base_url: S) -> Result<Self> {
        Self::new(&GithubConfig {
            api_base: base_url.into(),
            ..GithubConfig::default()
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

#[async_trait]
impl RepositoryProvider for GithubProvider {
    async fn create_repo(
        &self,
        token: &str,
        request: &GithubCreateRepoRequest,
    ) -> std::result::Result<GithubCreateRepoResponse, GithubErrorResponse> {
        let url = format!("{}{}", self.api_base, CREATE_REPO_PATH);
        debug!("GitHub API request: POST {} name={}", CREATE_REPO_PATH, request.name);

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, authorization_header(token))
            .header(ACCEPT, GITHUB_ACCEPT)
            .header(USER_AGENT, &self.user_agent)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("error when trying to create new repo in github: {}", e);
                GithubErrorResponse::internal(e.to_string())
            })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            error!("error when reading github response body: {}", e);
            GithubErrorResponse::internal(INVALID_RESPONSE_BODY)
        })?;

        if status.as_u16() > 299 {
            let mut err: GithubErrorResponse = serde_json::from_slice(&bytes)
                .map_err(|_| GithubErrorResponse::internal(INVALID_JSON_ERROR_BODY))?;
            err.status_code = status.as_u16();
            debug!(
                "GitHub rejected repository {}: {} {}",
                request.name,
                err.status_code,
                err.first_message()
            );
            return Err(err);
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            error!(
                "error when trying to unmarshal create repo successful response: {}",
                e
            );
            GithubErrorResponse::internal(INVALID_CREATE_REPO_RESPONSE)
        })
    }
}
