use serde::{Deserialize, Serialize};

use super::candidate::Candidate;

/// One query's container within a response.
///
/// The `chunks` sequence is index-correspondent across every shard answering
/// the same request: chunk `j` of document `i` refers to the same logical
/// unit in all of them. The fan-in stage matches purely by index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Top-K results at document granularity.
    pub candidates: Vec<Candidate>,
    pub chunks: Vec<Chunk>,
}

/// Sub-unit of a document carrying its own top-K list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// Top-K results at chunk granularity.
    pub candidates: Vec<Candidate>,
}
