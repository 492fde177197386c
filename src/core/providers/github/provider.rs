//! Remote repository creation seam

use super::models::{GithubCreateRepoRequest, GithubCreateRepoResponse, GithubErrorResponse};
use async_trait::async_trait;

/// Performs exactly one remote creation call per invocation, without retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepositoryProvider: Send + Sync {
    /// Create a repository for the user that owns `token`
    async fn create_repo(
        &self,
        token: &str,
        request: &GithubCreateRepoRequest,
    ) -> Result<GithubCreateRepoResponse, GithubErrorResponse>;
}
