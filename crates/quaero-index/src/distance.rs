//! Distance metrics for vector similarity.
//!
//! Provides the similarity metrics used for comparing vectors. Every metric
//! is exposed as a similarity score where **higher is more similar**, so
//! callers can rank results uniformly regardless of the underlying metric.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Distance metric for vector similarity calculations.
///
/// The choice of metric affects ranking:
///
/// - **Cosine**: Best for text embeddings (magnitude-invariant).
/// - **DotProduct**: Best for vectors that are already normalized.
/// - **Euclidean**: Best for raw feature vectors where magnitude matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DistanceMetric {
    /// Cosine similarity.
    ///
    /// Measures the angle between vectors, ignoring magnitude.
    /// Range: [-1, 1], where 1 means identical direction.
    #[default]
    Cosine,

    /// Dot product (inner product).
    ///
    /// Measures alignment of vectors including magnitude.
    /// Range: (-∞, ∞), where higher is more similar.
    DotProduct,

    /// Euclidean (L2) distance, transformed into a similarity score.
    ///
    /// The raw distance `d` is mapped to `1 / (1 + d)`, so the score lies
    /// in (0, 1] with 1 meaning identical vectors.
    Euclidean,
}

impl DistanceMetric {
    /// Compute the similarity score between two vectors.
    ///
    /// Returns a score where **higher is more similar** for all metrics.
    /// Both slices must have the same length; this is enforced by the
    /// index before any scoring happens.
    pub fn similarity(&self, a: &[f32], b: &[f32]) -> f32 {
        debug_assert_eq!(a.len(), b.len());
        match self {
            DistanceMetric::Cosine => cosine_similarity(a, b),
            DistanceMetric::DotProduct => dot_product(a, b),
            DistanceMetric::Euclidean => {
                let d = euclidean_distance(a, b);
                1.0 / (1.0 + d)
            }
        }
    }

    /// Human-readable metric name.
    pub fn name(&self) -> &'static str {
        match self {
            DistanceMetric::Cosine => "cosine",
            DistanceMetric::DotProduct => "dot_product",
            DistanceMetric::Euclidean => "euclidean",
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn dot_product(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot = dot_product(a, b);
    let norm_a = dot_product(a, a).sqrt();
    let norm_b = dot_product(b, b).sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

fn euclidean_distance(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f32>()
        .sqrt()
}
