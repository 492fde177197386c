//! GitHub wire models for repository creation

use crate::utils::error::ApiError;
use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Body of `POST /user/repos`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubCreateRepoRequest {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    pub private: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_issues: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_projects: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_wiki: Option<bool>,
}

/// Successful creation payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubCreateRepoResponse {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub owner: GithubRepoOwner,
    #[serde(default)]
    pub permissions: GithubRepoPermissions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubRepoOwner {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub html_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubRepoPermissions {
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub push: bool,
    #[serde(default)]
    pub pull: bool,
}

/// Error payload returned by GitHub, plus the HTTP status it came with
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubErrorResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub errors: Vec<GithubError>,
    #[serde(default)]
    pub documentation_url: String,
}

/// One entry of the `errors` array
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubError {
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub message: String,
}

impl GithubErrorResponse {
    /// Local failure reported with status 500
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self {
            status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            message: message.into(),
            ..Self::default()
        }
    }

    /// The top-level message, or the first non-empty nested one.
    pub fn first_message(&self) -> &str {
        if !self.message.is_empty() {
            return &self.message;
        }
        self.errors
            .iter()
            .map(|e| e.message.as_str())
            .find(|m| !m.is_empty())
            .unwrap_or("")
    }
}

impl From<GithubErrorResponse> for ApiError {
    fn from(err: GithubErrorResponse) -> Self {
        ApiError::new(err.status_code, err.first_message())
    }
}
