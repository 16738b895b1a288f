use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::MergeError;

/// Structural level at which top-K candidate lists are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Merge candidates chunk by chunk.
    Chunk,
    /// Merge candidates document by document.
    #[serde(alias = "doc")]
    Document,
    /// Document-level merge, then chunk-level merge, per document.
    #[serde(alias = "all")]
    Both,
}

impl Granularity {
    /// Parse a configured granularity name.
    ///
    /// `"doc"` and `"all"` are accepted aliases for `document` and `both`.
    /// Anything else is an unsupported configuration, rejected eagerly so a
    /// bad value never reaches merge time.
    pub fn parse(value: &str) -> Result<Self, MergeError> {
        match value {
            "chunk" => Ok(Self::Chunk),
            "document" | "doc" => Ok(Self::Document),
            "both" | "all" => Ok(Self::Both),
            other => Err(MergeError::UnsupportedGranularity {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Chunk => "chunk",
            Self::Document => "document",
            Self::Both => "both",
        };
        write!(f, "{name}")
    }
}
