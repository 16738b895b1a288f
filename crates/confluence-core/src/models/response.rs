use serde::{Deserialize, Serialize};

use super::document::Document;
use super::hop::Hop;

/// One shard's contribution to a fanned-out request.
///
/// The in-progress merged response has the same shape: the reduce stage
/// receives it plus the list of sibling shard responses and progressively
/// replaces its `trace` and candidate lists. Document `i` refers to the same
/// query in every sibling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShardResponse {
    /// Path the request took through the pipeline, one hop per node.
    pub trace: Vec<Hop>,
    pub documents: Vec<Document>,
}
