use serde::{Deserialize, Serialize};

/// A scored result produced by one shard's ranker.
///
/// The payload is opaque to the fan-in stage; only `score` is inspected,
/// and only for its total order. Upstream rankers emit scores sorted
/// ascending, so the merge keeps ascending order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Whatever the ranker attached: doc id, snippet, metadata.
    pub payload: serde_json::Value,
    pub score: f64,
}

impl Candidate {
    pub fn new(payload: serde_json::Value, score: f64) -> Self {
        Self { payload, score }
    }
}
