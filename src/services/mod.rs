//! Services module
//!
//! This module contains business logic and service implementations

pub mod repositories;

pub use repositories::{ReposService, RepositoryService};
