//! Edge weight policies
//!
//! A policy decides the weight stored by `add_edge`. Keyword graphs record
//! plain co-occurrence (weight 1, never accumulated); sentence graphs store
//! the similarity of the two sentences' encoded tokens.

use crate::similarity::calculate_similarity;
use crate::types::{Sentence, TokenId};

/// Computes the weight of an edge between two vertices
pub trait EdgePolicy<V> {
    /// Weight for the edge `a -- b`
    fn weight(&self, a: &V, b: &V) -> f64;
}

/// Presence-only weighting for window co-occurrence graphs
#[derive(Debug, Clone, Copy, Default)]
pub struct Cooccurrence;

impl<V> EdgePolicy<V> for Cooccurrence {
    #[inline]
    fn weight(&self, _a: &V, _b: &V) -> f64 {
        1.0
    }
}

/// Similarity function over encoded token sequences
pub type SimilarityMetric = fn(&[TokenId], &[TokenId]) -> f64;

/// Similarity weighting for sentence graphs.
///
/// Defaults to the Jaccard index; swapping the metric changes rankings and is
/// a configuration choice of the caller.
#[derive(Debug, Clone, Copy)]
pub struct SentenceSimilarity {
    metric: SimilarityMetric,
}

impl Default for SentenceSimilarity {
    fn default() -> Self {
        Self {
            metric: calculate_similarity::<TokenId>,
        }
    }
}

impl SentenceSimilarity {
    /// Use a custom similarity metric
    pub fn with_metric(metric: SimilarityMetric) -> Self {
        Self { metric }
    }
}

impl EdgePolicy<Sentence> for SentenceSimilarity {
    fn weight(&self, a: &Sentence, b: &Sentence) -> f64 {
        (self.metric)(a.encoded(), b.encoded())
    }
}
