//! Workspace configuration, loaded from TOML with per-section defaults.

pub mod merge_config;

pub use merge_config::MergeConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfluenceError, ConfluenceResult};

/// Root configuration for the fan-in stage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfluenceConfig {
    pub merge: MergeConfig,
}

impl ConfluenceConfig {
    /// Parse a TOML document; missing sections and fields use defaults.
    ///
    /// An unrecognized granularity value fails here, at setup time, rather
    /// than surfacing mid-merge.
    pub fn from_toml(content: &str) -> ConfluenceResult<Self> {
        toml::from_str(content).map_err(|e| ConfluenceError::Config {
            reason: e.to_string(),
        })
    }
}
