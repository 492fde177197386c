//! Repository creation request and result types

use crate::utils::error::ApiError;
use serde::{Deserialize, Serialize};

/// Message returned when a repository name is empty after trimming
pub const INVALID_REPOSITORY_NAME: &str = "invalid repository name";

/// Caller-facing request to create one repository
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRepoRequest {
    /// Repository name
    #[serde(default)]
    pub name: String,
    /// Repository description
    #[serde(default)]
    pub description: String,
}

impl CreateRepoRequest {
    pub fn new<N: Into<String>, D: Into<String>>(name: N, description: D) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Trim the name in place and reject it when nothing is left.
    pub fn validate(&mut self) -> Result<(), ApiError> {
        let trimmed = self.name.trim();
        if trimmed.len() != self.name.len() {
            self.name = trimmed.to_string();
        }
        if self.name.is_empty() {
            return Err(ApiError::bad_request(INVALID_REPOSITORY_NAME));
        }
        Ok(())
    }
}

/// A created repository, as reported back to the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRepoResponse {
    pub id: i64,
    pub owner: String,
    pub name: String,
}

/// Outcome of a single creation inside a batch.
///
/// Holds exactly one of a created repository or an error; the fields are
/// private so no other shape can be built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateReposResult {
    #[serde(rename = "repository")]
    response: Option<CreateRepoResponse>,
    error: Option<ApiError>,
}

impl CreateReposResult {
    pub fn success(response: CreateRepoResponse) -> Self {
        Self {
            response: Some(response),
            error: None,
        }
    }

    pub fn failure(error: ApiError) -> Self {
        Self {
            response: None,
            error: Some(error),
        }
    }

    pub fn response(&self) -> Option<&CreateRepoResponse> {
        self.response.as_ref()
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    pub fn is_success(&self) -> bool {
        self.response.is_some()
    }
}

impl From<Result<CreateRepoResponse, ApiError>> for CreateReposResult {
    fn from(result: Result<CreateRepoResponse, ApiError>) -> Self {
        match result {
            Ok(response) => Self::success(response),
            Err(error) => Self::failure(error),
        }
    }
}

/// Aggregated response for a batch of creations.
///
/// `results` is in completion order, not request order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateReposResponse {
    pub status_code: u16,
    pub results: Vec<CreateReposResult>,
}

impl CreateReposResponse {
    /// Number of results carrying a created repository
    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    /// Number of results carrying an error
    pub fn failure_count(&self) -> usize {
        self.results.len() - self.success_count()
    }
}
