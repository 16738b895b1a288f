//! Property tests: dedup/ordering of traces, completeness/ordering of
//! merged candidate lists, and isolation between granularities.

use std::collections::HashSet;

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use serde_json::json;

use confluence_core::models::{Candidate, Chunk, Document, Granularity, Hop, ShardResponse};
use confluence_reduce::{topk, trace};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_scores() -> BoxedStrategy<Vec<f64>> {
    prop::collection::vec(-1_000_000.0f64..1_000_000.0, 0..6).boxed()
}

/// Per-shard traces: each hop is (identity tag, seconds, nanos).
fn arb_traces() -> impl Strategy<Value = Vec<Vec<(u8, i64, u32)>>> {
    prop::collection::vec(
        prop::collection::vec((0u8..6, 0i64..1_000, 0u32..1_000_000_000), 0..5),
        0..4,
    )
}

/// One document's scores for one shard: (document-level, per-chunk).
type DocScores = (Vec<f64>, Vec<Vec<f64>>);

/// A shape (chunk count per document), a shard count, and one flat score
/// list per (shard, scope). `split_case` reshapes the flat lists.
fn arb_case() -> impl Strategy<Value = (Vec<usize>, Vec<Vec<DocScores>>)> {
    (prop::collection::vec(0usize..3, 0..3), 1usize..4).prop_flat_map(|(shape, shards)| {
        let lists_per_shard = shape.len() + shape.iter().sum::<usize>();
        let lists = prop::collection::vec(arb_scores(), shards * lists_per_shard);
        (Just(shape), Just(shards), lists)
            .prop_map(|(shape, shards, lists)| {
                let structured = split_case(&shape, shards, lists);
                (shape, structured)
            })
    })
}

/// Reshape flat score lists into per-shard, per-document structure: for each
/// shard, each document takes one document-level list then one per chunk.
fn split_case(shape: &[usize], shards: usize, lists: Vec<Vec<f64>>) -> Vec<Vec<DocScores>> {
    let mut iter = lists.into_iter();
    (0..shards)
        .map(|_| {
            shape
                .iter()
                .map(|&chunks| {
                    let doc_scores = iter.next().unwrap();
                    let chunk_scores = (0..chunks).map(|_| iter.next().unwrap()).collect();
                    (doc_scores, chunk_scores)
                })
                .collect()
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

fn build_shard(docs: &[DocScores]) -> ShardResponse {
    ShardResponse {
        trace: Vec::new(),
        documents: docs
            .iter()
            .map(|(doc_scores, chunk_scores)| Document {
                candidates: candidates_from(doc_scores),
                chunks: chunk_scores
                    .iter()
                    .map(|cs| Chunk {
                        candidates: candidates_from(cs),
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn candidates_from(scores: &[f64]) -> Vec<Candidate> {
    scores
        .iter()
        .map(|&s| Candidate::new(json!(s), s))
        .collect()
}

fn skeleton(shape: &[usize]) -> ShardResponse {
    ShardResponse {
        trace: Vec::new(),
        documents: shape
            .iter()
            .map(|&chunks| Document {
                candidates: Vec::new(),
                chunks: vec![Chunk::default(); chunks],
            })
            .collect(),
    }
}

fn sorted_scores(candidates: &[Candidate]) -> Vec<f64> {
    let mut scores: Vec<f64> = candidates.iter().map(|c| c.score).collect();
    scores.sort_by(f64::total_cmp);
    scores
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn merged_trace_has_unique_identities_in_ascending_order(traces in arb_traces()) {
        let shards: Vec<ShardResponse> = traces
            .iter()
            .map(|hops| ShardResponse {
                trace: hops
                    .iter()
                    .map(|&(id, secs, nanos)| {
                        Hop::new(
                            format!("svc{id}"),
                            "0",
                            Utc.timestamp_opt(secs, nanos).unwrap(),
                        )
                    })
                    .collect(),
                documents: Vec::new(),
            })
            .collect();
        let mut merged = ShardResponse::default();

        trace::merge(&mut merged, &shards);

        let identities: Vec<String> = merged.trace.iter().map(|h| h.service.clone()).collect();
        let unique: HashSet<&String> = identities.iter().collect();
        prop_assert_eq!(unique.len(), identities.len(), "duplicate identity survived");

        let expected: HashSet<u8> = traces.iter().flatten().map(|&(id, _, _)| id).collect();
        prop_assert_eq!(identities.len(), expected.len(), "identity lost or invented");

        for pair in merged.trace.windows(2) {
            prop_assert!(pair[0].start_time <= pair[1].start_time);
        }
    }

    #[test]
    fn document_merge_is_complete_and_ascending((shape, shard_scores) in arb_case()) {
        let shards: Vec<ShardResponse> = shard_scores.iter().map(|s| build_shard(s)).collect();
        let mut merged = skeleton(&shape);

        topk::merge(&mut merged, &shards, Granularity::Document).unwrap();

        for (doc_idx, doc) in merged.documents.iter().enumerate() {
            let mut expected: Vec<f64> = shard_scores
                .iter()
                .flat_map(|s| s[doc_idx].0.iter().copied())
                .collect();
            expected.sort_by(f64::total_cmp);
            prop_assert_eq!(sorted_scores(&doc.candidates), expected);

            for pair in doc.candidates.windows(2) {
                prop_assert!(pair[0].score <= pair[1].score);
            }
            // Chunk lists must stay untouched at document granularity.
            for chunk in &doc.chunks {
                prop_assert!(chunk.candidates.is_empty());
            }
        }
    }

    #[test]
    fn chunk_merge_is_complete_and_leaves_documents_alone((shape, shard_scores) in arb_case()) {
        let shards: Vec<ShardResponse> = shard_scores.iter().map(|s| build_shard(s)).collect();
        let mut merged = skeleton(&shape);

        topk::merge(&mut merged, &shards, Granularity::Chunk).unwrap();

        for (doc_idx, doc) in merged.documents.iter().enumerate() {
            prop_assert!(doc.candidates.is_empty(), "document list touched by chunk merge");
            for (chunk_idx, chunk) in doc.chunks.iter().enumerate() {
                let mut expected: Vec<f64> = shard_scores
                    .iter()
                    .flat_map(|s| s[doc_idx].1[chunk_idx].iter().copied())
                    .collect();
                expected.sort_by(f64::total_cmp);
                prop_assert_eq!(sorted_scores(&chunk.candidates), expected);

                for pair in chunk.candidates.windows(2) {
                    prop_assert!(pair[0].score <= pair[1].score);
                }
            }
        }
    }

    #[test]
    fn both_equals_document_then_chunk_composition((shape, shard_scores) in arb_case()) {
        let shards: Vec<ShardResponse> = shard_scores.iter().map(|s| build_shard(s)).collect();

        let mut via_both = skeleton(&shape);
        topk::merge(&mut via_both, &shards, Granularity::Both).unwrap();

        let mut via_composition = skeleton(&shape);
        topk::merge(&mut via_composition, &shards, Granularity::Document).unwrap();
        topk::merge(&mut via_composition, &shards, Granularity::Chunk).unwrap();

        prop_assert_eq!(via_both, via_composition);
    }
}
