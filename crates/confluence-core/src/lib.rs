//! # confluence-core
//!
//! Foundation crate for the Confluence fan-in stage.
//! Defines the partial-response data model, errors, and config.
//! The reduce crate depends on this.

pub mod config;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::{ConfluenceConfig, MergeConfig};
pub use errors::{ConfluenceError, ConfluenceResult, MergeError};
pub use models::{Candidate, Chunk, Document, Granularity, Hop, ShardResponse};
