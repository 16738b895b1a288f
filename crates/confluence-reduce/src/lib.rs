//! # confluence-reduce
//!
//! Fan-in stage of a sharded request/response pipeline. A request fanned out
//! to N shards comes back as N partial responses; this crate collapses them
//! into one: hop traces are deduplicated and time-ordered, and per-shard
//! top-K candidate lists are pooled and resorted at a configured granularity.
//!
//! The stage is synchronous, allocation-only, and stateless across requests.
//! Collecting the complete shard set (and deciding whether an incomplete set
//! is acceptable) is the dispatch layer's job, not this crate's.

pub mod policy;
pub mod stage;
pub mod topk;
pub mod trace;

pub use policy::MergePolicy;
pub use stage::ReduceStage;
