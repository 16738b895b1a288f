//! Merge policy: a validated granularity carried across requests.

use confluence_core::errors::ConfluenceResult;
use confluence_core::models::Granularity;

/// Value object selecting the top-K merge granularity.
///
/// Validated once at construction and passed unchanged to every merge a
/// stage performs; an unknown granularity name fails here, at setup time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergePolicy {
    granularity: Granularity,
}

impl MergePolicy {
    pub fn new(granularity: Granularity) -> Self {
        Self { granularity }
    }

    /// Build a policy from a configured granularity name.
    pub fn from_name(value: &str) -> ConfluenceResult<Self> {
        Ok(Self::new(Granularity::parse(value)?))
    }

    /// Preset: merge chunk-level candidate lists only.
    pub fn chunk_only() -> Self {
        Self::new(Granularity::Chunk)
    }

    /// Preset: merge document-level candidate lists only.
    pub fn document_only() -> Self {
        Self::new(Granularity::Document)
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }
}

impl Default for MergePolicy {
    fn default() -> Self {
        Self::new(Granularity::Both)
    }
}
