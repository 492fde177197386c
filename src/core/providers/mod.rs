//! Remote repository providers

pub mod github;

pub use github::{GithubProvider, RepositoryProvider};
