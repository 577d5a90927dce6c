//! Occurrence positions and position weights
//!
//! Each vertex's weight is `sum(1 / (index + 1))` over its 0-based occurrence
//! indices, normalized so the weights of all recorded vertices sum to 1.
//! Early and frequent tokens therefore weigh more.

use crate::errors::{RankError, Result};
use rustc_hash::FxHashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Per-vertex occurrence indices and the weights derived from them
#[derive(Debug, Clone)]
pub struct PositionIndex<V> {
    /// Vertices in order of first occurrence
    order: Vec<V>,
    occurrences: FxHashMap<V, Vec<usize>>,
    weights: Option<FxHashMap<V, f64>>,
}

impl<V> Default for PositionIndex<V> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            occurrences: FxHashMap::default(),
            weights: None,
        }
    }
}

impl<V: Clone + Eq + Hash + Debug> PositionIndex<V> {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the occurrence indices of every token, replacing any earlier
    /// record and invalidating computed weights
    pub fn fill(&mut self, tokens: &[V]) -> Result<()> {
        if tokens.is_empty() {
            return Err(RankError::empty_input("no tokens to record positions for"));
        }

        self.order.clear();
        self.occurrences.clear();
        self.weights = None;

        for (idx, token) in tokens.iter().enumerate() {
            match self.occurrences.get_mut(token) {
                Some(positions) => positions.push(idx),
                None => {
                    self.order.push(token.clone());
                    self.occurrences.insert(token.clone(), vec![idx]);
                }
            }
        }

        Ok(())
    }

    /// Occurrence indices of a vertex
    pub fn occurrences(&self, vertex: &V) -> Option<&[usize]> {
        self.occurrences.get(vertex).map(Vec::as_slice)
    }

    /// Compute normalized weights from the recorded positions
    pub fn calculate_weights(&mut self) -> Result<()> {
        if self.order.is_empty() {
            return Err(RankError::empty_input(
                "positions must be recorded before weights are calculated",
            ));
        }

        let raw: Vec<f64> = self
            .order
            .iter()
            .map(|vertex| {
                self.occurrences[vertex]
                    .iter()
                    .map(|&idx| 1.0 / (idx as f64 + 1.0))
                    .sum()
            })
            .collect();
        let total: f64 = raw.iter().sum();

        let weights = self
            .order
            .iter()
            .cloned()
            .zip(raw)
            .map(|(vertex, weight)| (vertex, weight / total))
            .collect();
        self.weights = Some(weights);

        Ok(())
    }

    /// Check whether weights have been calculated
    pub fn is_weighted(&self) -> bool {
        self.weights.is_some()
    }

    /// Normalized weight of a vertex
    pub fn weight(&self, vertex: &V) -> Result<f64> {
        let weights = self.weights.as_ref().ok_or_else(|| {
            RankError::invalid_argument("position weights have not been calculated")
        })?;
        weights
            .get(vertex)
            .copied()
            .ok_or_else(|| RankError::unknown_vertex(vertex))
    }

    /// Number of distinct recorded vertices
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
