//! Core functionality for the Gateway
//!
//! This module contains the core business logic and data structures:
//! repository request/response types, the GitHub provider, and the batch
//! coordinator.

pub mod batch;
pub mod providers;
pub mod repositories;
