//! Error taxonomy for the Confluence fan-in stage.
//!
//! Errors are never recovered locally: a failed merge leaves the merged
//! response in a don't-use state and the caller aborts the request.

pub mod merge_error;

pub use merge_error::MergeError;

/// Top-level error for all Confluence operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfluenceError {
    #[error(transparent)]
    Merge(#[from] MergeError),

    #[error("configuration error: {reason}")]
    Config { reason: String },
}

pub type ConfluenceResult<T> = Result<T, ConfluenceError>;
