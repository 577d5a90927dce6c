//! TextRank scoring
//!
//! [`engine::TextRank`] runs the damped power iteration over any
//! [`TextGraph`](crate::graph::TextGraph); [`restart`] holds the strategies
//! for the restart term. Results land in a [`ScoreTable`].

pub mod engine;
pub mod restart;

use crate::errors::{RankError, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::Hash;

pub use engine::{PositionBiasedTextRank, TextRank, VanillaTextRank};
pub use restart::{PositionRestart, RestartStrategy, UniformRestart};

/// Outcome of a training run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankResult {
    /// Number of iterations performed
    pub iterations: usize,
    /// Summed absolute score change of the last iteration
    pub delta: f64,
    /// Whether the delta fell to the threshold before the iteration cap
    pub converged: bool,
}

impl RankResult {
    /// Create a new result
    pub fn new(iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            iterations,
            delta,
            converged,
        }
    }
}

/// Scores per vertex, in the graph's registration order
#[derive(Debug, Clone)]
pub struct ScoreTable<V> {
    vertices: Vec<V>,
    index: FxHashMap<V, usize>,
    scores: Vec<f64>,
}

impl<V> Default for ScoreTable<V> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            index: FxHashMap::default(),
            scores: Vec::new(),
        }
    }
}

impl<V: Clone + Eq + Hash> ScoreTable<V> {
    /// Pair vertices with their scores. Both slices follow registration order.
    pub fn new(vertices: Vec<V>, scores: Vec<f64>) -> Self {
        debug_assert_eq!(vertices.len(), scores.len());
        let index = vertices
            .iter()
            .enumerate()
            .map(|(idx, vertex)| (vertex.clone(), idx))
            .collect();
        Self {
            vertices,
            index,
            scores,
        }
    }

    /// Score of a vertex, if it was ranked
    pub fn get(&self, vertex: &V) -> Option<f64> {
        self.index.get(vertex).map(|&idx| self.scores[idx])
    }

    /// Iterate over `(vertex, score)` in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&V, f64)> + '_ {
        self.vertices.iter().zip(self.scores.iter().copied())
    }

    /// Number of scored vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The `n` highest-scoring vertices, best first.
    ///
    /// Exact score ties keep registration order, so the result is a pure
    /// function of the table and `n`. Returns `min(n, len)` entries.
    pub fn top_n(&self, n: usize) -> Result<Vec<(&V, f64)>> {
        if n == 0 {
            return Err(RankError::invalid_argument(
                "number of top vertices must be positive",
            ));
        }

        let mut order: Vec<usize> = (0..self.scores.len()).collect();
        order.sort_by(|&a, &b| descending(self.scores[a], self.scores[b]).then(a.cmp(&b)));
        order.truncate(n);

        Ok(order
            .into_iter()
            .map(|idx| (&self.vertices[idx], self.scores[idx]))
            .collect())
    }
}

/// Total descending order on scores
fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
