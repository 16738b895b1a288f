use serde::{Deserialize, Serialize};

use crate::models::Granularity;

/// Merge stage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Granularity at which top-K candidate lists are merged.
    pub granularity: Granularity,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            granularity: Granularity::Both,
        }
    }
}
