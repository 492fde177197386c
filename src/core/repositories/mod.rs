//! Repository creation domain types
//!
//! Caller-facing request/response shapes shared by the single-item service,
//! the batch coordinator and the HTTP routes.

mod types;

pub use types::{
    CreateRepoRequest, CreateRepoResponse, CreateReposResponse, CreateReposResult,
    INVALID_REPOSITORY_NAME,
};
