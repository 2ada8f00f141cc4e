//! Error types for quaero-index.

use thiserror::Error;

/// Result type for quaero-index operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in quaero-index operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Dimension mismatch between a vector and the index.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions.
        expected: usize,
        /// Actual dimensions provided.
        actual: usize,
    },

    /// Invalid vector (e.g., empty, contains NaN).
    #[error("Invalid vector: {0}")]
    InvalidVector(String),

    /// Append called with no records.
    #[error("No records provided")]
    EmptyBatch,

    /// Persistence error (serialization, malformed index file, etc.).
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
