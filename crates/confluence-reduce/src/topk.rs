//! Sharded top-K merge: pool same-indexed candidate lists, resort by score.
//!
//! Document `i` / chunk `j` is assumed to be the same logical unit in every
//! shard response; matching is purely positional. A shard that is missing an
//! index the merged skeleton expects is a hard error, never silently skipped.
//!
//! Complexity: O(D·K·R) at document granularity, O(D·C·K·R) at chunk
//! granularity, where D = documents, C = chunks per document, K = average
//! candidate-list length, R = shards. `both` costs the sum.

use std::cmp::Ordering;

use confluence_core::errors::{ConfluenceResult, MergeError};
use confluence_core::models::{Candidate, Granularity, ShardResponse};

/// Replace candidate lists in `merged` at the given granularity.
///
/// Each visited scope gets the concatenation of the same-indexed scope's
/// candidates across all shards, sorted ascending by score. Candidates are
/// never deduplicated. On error the merged response may be partially
/// updated and must be discarded by the caller.
pub fn merge(
    merged: &mut ShardResponse,
    shards: &[ShardResponse],
    granularity: Granularity,
) -> ConfluenceResult<()> {
    match granularity {
        Granularity::Chunk => merge_chunk_level(merged, shards),
        Granularity::Document => merge_document_level(merged, shards),
        Granularity::Both => {
            merge_document_level(merged, shards)?;
            merge_chunk_level(merged, shards)
        }
    }
}

fn merge_document_level(
    merged: &mut ShardResponse,
    shards: &[ShardResponse],
) -> ConfluenceResult<()> {
    for (doc_idx, doc) in merged.documents.iter_mut().enumerate() {
        let mut pooled: Vec<Candidate> = Vec::new();
        for (shard_idx, shard) in shards.iter().enumerate() {
            let source = shard.documents.get(doc_idx).ok_or_else(|| {
                MergeError::DocumentIndexOutOfRange {
                    shard: shard_idx,
                    index: doc_idx,
                    len: shard.documents.len(),
                }
            })?;
            pooled.extend_from_slice(&source.candidates);
        }
        sort_ascending(&mut pooled);
        doc.candidates = pooled;
    }
    Ok(())
}

fn merge_chunk_level(merged: &mut ShardResponse, shards: &[ShardResponse]) -> ConfluenceResult<()> {
    for (doc_idx, doc) in merged.documents.iter_mut().enumerate() {
        for (chunk_idx, chunk) in doc.chunks.iter_mut().enumerate() {
            let mut pooled: Vec<Candidate> = Vec::new();
            for (shard_idx, shard) in shards.iter().enumerate() {
                let source_doc = shard.documents.get(doc_idx).ok_or_else(|| {
                    MergeError::DocumentIndexOutOfRange {
                        shard: shard_idx,
                        index: doc_idx,
                        len: shard.documents.len(),
                    }
                })?;
                let source = source_doc.chunks.get(chunk_idx).ok_or_else(|| {
                    MergeError::ChunkIndexOutOfRange {
                        shard: shard_idx,
                        document: doc_idx,
                        index: chunk_idx,
                        len: source_doc.chunks.len(),
                    }
                })?;
                pooled.extend_from_slice(&source.candidates);
            }
            sort_ascending(&mut pooled);
            chunk.candidates = pooled;
        }
    }
    Ok(())
}

/// Ascending by score; NaN compares equal so it never panics the sort.
fn sort_ascending(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal));
}
