//! Repository creation service
//!
//! Validates requests, forwards them to the repository provider and fans
//! batches out through the batch coordinator.

mod service;

pub use service::{ReposService, RepositoryService};
