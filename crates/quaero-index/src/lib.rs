//! # quaero-index
//!
//! An embedded, durable vector index with exact nearest-neighbor search,
//! built for retrieval-augmented generation workloads.
//!
//! ## Features
//!
//! - **Pure Rust**: No native dependencies, compiles anywhere Rust does
//! - **Exact search**: Deterministic full-scan ranking with stable,
//!   insertion-order tie-breaking
//! - **Thread-Safe**: Concurrent reads, atomic batch appends
//! - **Persistence**: Atomic snapshot-to-disk with corruption-tolerant load
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use quaero_index::{DistanceMetric, IndexRecord, StoredChunk, VectorIndex};
//!
//! let index = VectorIndex::new(384, DistanceMetric::Cosine)?;
//!
//! index.append(vec![IndexRecord::new(
//!     StoredChunk {
//!         source: "notes.txt".into(),
//!         position: 0,
//!         text: "The capital of France is Paris.".into(),
//!     },
//!     vec![0.1f32; 384],
//! )])?;
//!
//! let hits = index.search(&vec![0.1f32; 384], 4)?;
//! ```
//!
//! ## Persistence
//!
//! The full index (vectors + chunk payloads) is written as a single JSON
//! snapshot via a temp-file-and-rename protocol, so a reader never observes
//! a partially-written index. See [`persistence`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod distance;
pub mod error;
pub mod persistence;
pub mod types;

// Re-exports for convenience
pub use distance::DistanceMetric;
pub use error::{Error, Result};
pub use types::{IndexRecord, SearchHit, StoredChunk};

use parking_lot::RwLock;
use tracing::{debug, instrument};

/// An in-memory vector index over (chunk, embedding) records.
///
/// Dimensionality is fixed at creation time; every appended vector must
/// match it. Records are append-only: chunks are never mutated or removed
/// once indexed.
///
/// # Thread Safety
///
/// Reads (`search`, `len`) take a shared lock; `append` takes an exclusive
/// lock for the whole batch, so concurrent readers never observe a
/// partially-appended batch.
pub struct VectorIndex {
    /// Vector dimensions, fixed at creation.
    dimensions: usize,
    /// Similarity metric.
    metric: DistanceMetric,
    /// The records, in insertion order.
    records: RwLock<Vec<IndexRecord>>,
}

impl VectorIndex {
    /// Create a new, empty index.
    ///
    /// # Errors
    ///
    /// Returns an error if `dimensions` is zero.
    pub fn new(dimensions: usize, metric: DistanceMetric) -> Result<Self> {
        if dimensions == 0 {
            return Err(Error::InvalidVector("Dimensions must be > 0".to_string()));
        }

        Ok(Self {
            dimensions,
            metric,
            records: RwLock::new(Vec::new()),
        })
    }

    /// Rebuild an index from previously exported records.
    ///
    /// Used by [`persistence::load_index`]; validates every record against
    /// the declared dimensionality.
    pub fn from_records(
        dimensions: usize,
        metric: DistanceMetric,
        records: Vec<IndexRecord>,
    ) -> Result<Self> {
        let index = Self::new(dimensions, metric)?;
        if !records.is_empty() {
            index.append(records)?;
        }
        Ok(index)
    }

    /// Get the vector dimensions.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Get the similarity metric.
    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    /// Get the number of records in the index.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Append a batch of records.
    ///
    /// The whole batch is validated before anything is written, and the
    /// append happens under a single exclusive lock: either every record
    /// lands or none does, and no reader observes an intermediate state.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyBatch`] if `records` is empty.
    /// - [`Error::DimensionMismatch`] if any vector's length differs from
    ///   the index dimensionality.
    /// - [`Error::InvalidVector`] if any vector contains NaN or Inf.
    #[instrument(skip(self, records), fields(count = records.len()))]
    pub fn append(&self, records: Vec<IndexRecord>) -> Result<usize> {
        if records.is_empty() {
            return Err(Error::EmptyBatch);
        }

        for record in &records {
            if record.vector.len() != self.dimensions {
                return Err(Error::DimensionMismatch {
                    expected: self.dimensions,
                    actual: record.vector.len(),
                });
            }
            if record.vector.iter().any(|v| !v.is_finite()) {
                return Err(Error::InvalidVector(
                    "Vector contains NaN or Inf".to_string(),
                ));
            }
        }

        let count = records.len();
        let mut store = self.records.write();
        store.extend(records);
        debug!(count, total = store.len(), "Appended records");
        Ok(count)
    }

    /// Search for the `k` records most similar to `query`.
    ///
    /// Results are ordered by descending similarity; equal scores are
    /// broken by insertion order (earlier-inserted record wins).
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the query's length differs
    /// from the index dimensionality.
    #[instrument(skip(self, query), fields(k, dim = query.len()))]
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<SearchHit>> {
        if query.len() != self.dimensions {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions,
                actual: query.len(),
            });
        }

        let store = self.records.read();
        let mut hits: Vec<SearchHit> = store
            .iter()
            .map(|record| SearchHit {
                chunk: record.chunk.clone(),
                score: self.metric.similarity(query, &record.vector),
            })
            .collect();

        // Stable sort: equal scores keep scan order, which is insertion order.
        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        hits.truncate(k);

        debug!(count = hits.len(), "Search completed");
        Ok(hits)
    }

    /// Export all records in insertion order, for persistence.
    pub fn export_records(&self) -> Vec<IndexRecord> {
        self.records.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(source: &str, position: usize, text: &str) -> StoredChunk {
        StoredChunk {
            source: source.to_string(),
            position,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_append_and_search() {
        let index = VectorIndex::new(3, DistanceMetric::Cosine).unwrap();

        index
            .append(vec![
                IndexRecord::new(chunk("a", 0, "first"), vec![1.0, 0.0, 0.0]),
                IndexRecord::new(chunk("a", 1, "second"), vec![0.0, 1.0, 0.0]),
                IndexRecord::new(chunk("a", 2, "third"), vec![0.9, 0.1, 0.0]),
            ])
            .unwrap();

        let hits = index.search(&[1.0, 0.0, 0.0], 2).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].chunk.text, "first");
        assert_eq!(hits[1].chunk.text, "third");
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            VectorIndex::new(0, DistanceMetric::Cosine),
            Err(Error::InvalidVector(_))
        ));
    }

    #[test]
    fn test_dimension_mismatch_leaves_index_unchanged() {
        let index = VectorIndex::new(3, DistanceMetric::Cosine).unwrap();
        index
            .append(vec![IndexRecord::new(chunk("a", 0, "ok"), vec![1.0, 0.0, 0.0])])
            .unwrap();

        // Second record in the batch has the wrong dimensionality; the
        // whole batch must be rejected.
        let result = index.append(vec![
            IndexRecord::new(chunk("a", 1, "fine"), vec![0.0, 1.0, 0.0]),
            IndexRecord::new(chunk("a", 2, "bad"), vec![0.0, 1.0]),
        ]);
        assert!(matches!(
            result,
            Err(Error::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        ));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_empty_batch_rejected() {
        let index = VectorIndex::new(3, DistanceMetric::Cosine).unwrap();
        assert!(matches!(index.append(vec![]), Err(Error::EmptyBatch)));
    }

    #[test]
    fn test_nan_vector_rejected() {
        let index = VectorIndex::new(2, DistanceMetric::Cosine).unwrap();
        let result = index.append(vec![IndexRecord::new(
            chunk("a", 0, "bad"),
            vec![f32::NAN, 0.0],
        )]);
        assert!(matches!(result, Err(Error::InvalidVector(_))));
        assert!(index.is_empty());
    }

    #[test]
    fn test_tie_break_by_insertion_order() {
        let index = VectorIndex::new(2, DistanceMetric::Cosine).unwrap();

        // Two identical vectors: scores tie exactly, earlier insert wins.
        index
            .append(vec![
                IndexRecord::new(chunk("a", 0, "earlier"), vec![1.0, 0.0]),
                IndexRecord::new(chunk("a", 1, "later"), vec![1.0, 0.0]),
            ])
            .unwrap();

        let hits = index.search(&[1.0, 0.0], 2).unwrap();
        assert_eq!(hits[0].chunk.text, "earlier");
        assert_eq!(hits[1].chunk.text, "later");
    }

    #[test]
    fn test_search_query_dimension_checked() {
        let index = VectorIndex::new(3, DistanceMetric::Cosine).unwrap();
        assert!(matches!(
            index.search(&[1.0, 0.0], 4),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_search_returns_at_most_k() {
        let index = VectorIndex::new(2, DistanceMetric::Cosine).unwrap();
        let records = (0..10)
            .map(|i| IndexRecord::new(chunk("a", i, "text"), vec![1.0, i as f32]))
            .collect();
        index.append(records).unwrap();

        assert_eq!(index.search(&[1.0, 0.0], 4).unwrap().len(), 4);
        assert_eq!(index.search(&[1.0, 0.0], 100).unwrap().len(), 10);
    }
}
