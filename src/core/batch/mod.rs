//! Concurrent batch creation
//!
//! [`BatchCoordinator`] fans work out to one task per item and gathers every
//! outcome back through a single collector; [`derive_status`] folds the
//! collected outcomes into one status code.

mod coordinator;
mod status;


pub use coordinator::{BatchCoordinator, BatchOutcome, TASK_FAILED};
pub use status::derive_status;
