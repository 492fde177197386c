//! Repository creation service

use crate::config::{BatchConfig, Config};
use crate::core::batch::{BatchCoordinator, derive_status};
use crate::core::providers::github::{GithubCreateRepoRequest, GithubProvider, RepositoryProvider};
use crate::core::repositories::{
    CreateRepoRequest, CreateRepoResponse, CreateReposResponse, CreateReposResult,
};
use crate::utils::error::{ApiError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Single and batch repository creation
#[async_trait]
pub trait RepositoryService: Send + Sync {
    /// Validate and create one repository
    async fn create_repo(&self, request: CreateRepoRequest)
    -> std::result::Result<CreateRepoResponse, ApiError>;

    /// Create every repository concurrently and aggregate the outcomes
    async fn create_repos(&self, requests: Vec<CreateRepoRequest>) -> CreateReposResponse;
}

/// [`RepositoryService`] backed by a [`RepositoryProvider`]
#[derive(Clone)]
pub struct ReposService {
    provider: Arc<dyn RepositoryProvider>,
    access_token: Arc<str>,
    coordinator: BatchCoordinator,
}

impl ReposService {
    pub fn new<S: Into<Arc<str>>>(
        provider: Arc<dyn RepositoryProvider>,
        access_token: S,
        batch: BatchConfig,
    ) -> Self {
        Self {
            provider,
            access_token: access_token.into(),
            coordinator: BatchCoordinator::new(batch),
        }
    }

    /// Build the service with a GitHub provider from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let github = config.github();
        if !github.has_access_token() {
            warn!("GitHub access token is not set; repository creation will be rejected");
        }

        let provider = GithubProvider::new(github)?;
        Ok(Self::new(
            Arc::new(provider),
            github.access_token.as_str(),
            config.batch().clone(),
        ))
    }
}

#[async_trait]
impl RepositoryService for ReposService {
    async fn create_repo(
        &self,
        mut request: CreateRepoRequest,
    ) -> std::result::Result<CreateRepoResponse, ApiError> {
        request.validate()?;

        // New repositories are always private.
        let github_request = GithubCreateRepoRequest {
            name: request.name,
            description: request.description,
            private: true,
            ..Default::default()
        };

        let response = self
            .provider
            .create_repo(&self.access_token, &github_request)
            .await
            .map_err(ApiError::from)?;

        debug!("Created repository {} (id {})", response.name, response.id);
        Ok(CreateRepoResponse {
            id: response.id,
            name: response.name,
            owner: response.owner.login,
        })
    }

    async fn create_repos(&self, requests: Vec<CreateRepoRequest>) -> CreateReposResponse {
        let request_count = requests.len();
        let service = self.clone();

        let results = self
            .coordinator
            .run(requests, move |request| {
                let service = service.clone();
                async move { CreateReposResult::from(service.create_repo(request).await) }
            })
            .await;

        let status_code = derive_status(&results, request_count);
        let response = CreateReposResponse {
            status_code,
            results,
        };

        info!(
            requested = request_count,
            succeeded = response.success_count(),
            failed = response.failure_count(),
            status_code,
            "Batch repository creation finished"
        );
        response
    }
}
