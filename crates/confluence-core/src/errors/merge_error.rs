/// Fan-in merge errors.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    #[error("unsupported merge granularity {value:?}, must be one of \"chunk\", \"document\", \"both\"")]
    UnsupportedGranularity { value: String },

    #[error("shard {shard} has {len} documents, merged response expects document index {index}")]
    DocumentIndexOutOfRange {
        shard: usize,
        index: usize,
        len: usize,
    },

    #[error(
        "shard {shard} document {document} has {len} chunks, merged response expects chunk index {index}"
    )]
    ChunkIndexOutOfRange {
        shard: usize,
        document: usize,
        index: usize,
        len: usize,
    },
}
