pub mod candidate;
pub mod document;
pub mod granularity;
pub mod hop;
pub mod response;

pub use candidate::Candidate;
pub use document::{Chunk, Document};
pub use granularity::Granularity;
pub use hop::Hop;
pub use response::ShardResponse;
