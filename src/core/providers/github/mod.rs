//! GitHub repository provider
//!
//! The remote creation client: one authenticated `POST /user/repos` per call,
//! with remote and local failures folded into [`GithubErrorResponse`].

mod client;
mod models;
mod provider;

pub use client::{
    GithubProvider, INVALID_CREATE_REPO_RESPONSE, INVALID_JSON_ERROR_BODY, INVALID_RESPONSE_BODY,
};
pub use models::{
    GithubCreateRepoRequest, GithubCreateRepoResponse, GithubError, GithubErrorResponse,
    GithubRepoOwner, GithubRepoPermissions,
};
#[cfg(test)]
pub use provider::MockRepositoryProvider;
pub use provider::RepositoryProvider;
