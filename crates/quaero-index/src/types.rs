//! Common types for quaero-index.

use serde::{Deserialize, Serialize};

/// The text payload stored alongside each vector: a chunk of a source
/// document together with its provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredChunk {
    /// Identifier of the originating document (filename or synthetic label).
    pub source: String,
    /// Position of this chunk within its document (0-indexed).
    pub position: usize,
    /// The chunk text.
    pub text: String,
}

/// A (chunk, vector) pair as appended to the index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexRecord {
    /// The chunk payload.
    pub chunk: StoredChunk,
    /// The embedding vector for the chunk text.
    pub vector: Vec<f32>,
}

impl IndexRecord {
    /// Create a new record.
    pub fn new(chunk: StoredChunk, vector: Vec<f32>) -> Self {
        Self { chunk, vector }
    }
}

/// Result of a similarity search.
#[derive(Debug, Clone)]
pub struct SearchHit {
    /// The matched chunk.
    pub chunk: StoredChunk,
    /// Similarity score (higher = more similar).
    pub score: f32,
}
