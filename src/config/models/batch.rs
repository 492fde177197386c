//! Batch coordinator configuration

use serde::{Deserialize, Serialize};

/// Limits applied to batch creation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Maximum number of creations in flight at once; unbounded when unset
    #[serde(default)]
    pub max_concurrency: Option<usize>,
}

impl BatchConfig {
    pub fn with_max_concurrency(max_concurrency: usize) -> Self {
        Self {
            max_concurrency: Some(max_concurrency),
        }
    }

    pub fn is_bounded(&self) -> bool {
        self.max_concurrency.is_some()
    }
}
