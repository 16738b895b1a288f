//! ReduceStage: the fan-in driver embedded in the pipeline.
//!
//! Trace merging is unconditional; top-K merging is opt-in by which method
//! the caller invokes (`merge_traces` vs `reduce`).

use tracing::debug;

use confluence_core::config::MergeConfig;
use confluence_core::errors::ConfluenceResult;
use confluence_core::models::ShardResponse;

use crate::policy::MergePolicy;
use crate::{topk, trace};

/// Collapses N shard responses into the in-progress merged response.
///
/// Holds no per-request state: every invocation operates only on the merged
/// response and shard list passed to it, so independent instances can merge
/// concurrent requests freely.
pub struct ReduceStage {
    policy: MergePolicy,
}

impl ReduceStage {
    pub fn new(policy: MergePolicy) -> Self {
        Self { policy }
    }

    pub fn from_config(config: &MergeConfig) -> Self {
        Self::new(MergePolicy::new(config.granularity))
    }

    /// Preset: top-K merging at chunk granularity.
    pub fn chunk_only() -> Self {
        Self::new(MergePolicy::chunk_only())
    }

    /// Preset: top-K merging at document granularity.
    pub fn document_only() -> Self {
        Self::new(MergePolicy::document_only())
    }

    /// Trace-only driver: reconcile hop traces, leave candidate lists alone.
    pub fn merge_traces(&self, merged: &mut ShardResponse, shards: &[ShardResponse]) {
        trace::merge(merged, shards);
        debug!(
            shards = shards.len(),
            hops = merged.trace.len(),
            "merged shard traces"
        );
    }

    /// Full fan-in: trace merge, then top-K merge at the configured
    /// granularity.
    ///
    /// On error the merged response is in an undefined state and must be
    /// discarded; the request should be failed upstream.
    pub fn reduce(&self, merged: &mut ShardResponse, shards: &[ShardResponse]) -> ConfluenceResult<()> {
        self.merge_traces(merged, shards);
        topk::merge(merged, shards, self.policy.granularity())?;
        debug!(
            shards = shards.len(),
            granularity = %self.policy.granularity(),
            documents = merged.documents.len(),
            "merged shard top-k results"
        );
        Ok(())
    }
}

impl Default for ReduceStage {
    fn default() -> Self {
        Self::new(MergePolicy::default())
    }
}
