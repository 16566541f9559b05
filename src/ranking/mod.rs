//! Exhaustive cosine-similarity ranking over the vector store.
//!
//! Every stored vector is scored against the query (O(N·d)); the corpus is
//! small enough that no index structure is used.

use std::cmp::Ordering;
use thiserror::Error;

use crate::models::ScoredResult;
use crate::store::VectorStore;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RankError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Query has {actual} dimensions, store has {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Dot product accumulated in `f64`; products of finite `f32`s cannot
/// overflow there.
pub fn dot(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| f64::from(x) * f64::from(y))
        .sum()
}

pub fn l2_norm(v: &[f32]) -> f64 {
    v.iter()
        .map(|&x| f64::from(x) * f64::from(x))
        .sum::<f64>()
        .sqrt()
}

/// Cosine of the angle between `a` and `b`.
///
/// Returns 0.0 if either vector has zero magnitude or the lengths differ,
/// and clamps rounding overshoot into [-1, 1].
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }
    similarity_from_parts(dot(a, b), l2_norm(a), l2_norm(b))
}

fn similarity_from_parts(dot: f64, norm_a: f64, norm_b: f64) -> f32 {
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    let quotient = dot / (norm_a * norm_b);
    if !quotient.is_finite() {
        return 0.0;
    }
    let similarity = quotient.clamp(-1.0, 1.0) as f32;
    // -0.0 must tie with 0.0 under total_cmp
    if similarity == 0.0 {
        0.0
    } else {
        similarity
    }
}

/// Descending similarity, ties by ascending store index.
fn by_rank(a: &ScoredResult, b: &ScoredResult) -> Ordering {
    b.similarity
        .total_cmp(&a.similarity)
        .then_with(|| a.index.cmp(&b.index))
}

/// Score every store entry against `query` and return the best `k`.
///
/// The result has `min(k, store.len())` entries ordered by non-increasing
/// similarity. An empty store yields an empty result for any positive `k`.
pub fn rank(query: &[f32], store: &VectorStore, k: usize) -> Result<Vec<ScoredResult>, RankError> {
    if k == 0 {
        return Err(RankError::InvalidInput {
            message: "k must be a positive integer".to_string(),
        });
    }
    if store.is_empty() {
        return Ok(Vec::new());
    }
    if query.len() != store.dimension() {
        return Err(RankError::DimensionMismatch {
            expected: store.dimension(),
            actual: query.len(),
        });
    }

    let query_norm = l2_norm(query);
    let mut scored: Vec<ScoredResult> = store
        .iter()
        .map(|entry| ScoredResult {
            index: entry.index,
            similarity: similarity_from_parts(dot(query, entry.components), query_norm, entry.norm),
        })
        .collect();

    if k < scored.len() {
        scored.select_nth_unstable_by(k - 1, by_rank);
        scored.truncate(k);
    }
    scored.sort_unstable_by(by_rank);

    Ok(scored)
}
