//! Dense adjacency-matrix backing
//!
//! Stores a full `n x n` weight matrix. Registering a vertex grows every row
//! by one column, so construction is quadratic in the vertex count; lookups
//! are O(1).

use super::policy::{Cooccurrence, EdgePolicy};
use super::positions::PositionIndex;
use super::{checked_weight, TextGraph};
use crate::errors::{RankError, Result};
use rustc_hash::FxHashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Graph backed by a dense adjacency matrix
#[derive(Debug, Clone)]
pub struct AdjacencyMatrixGraph<V, P = Cooccurrence> {
    vertices: Vec<V>,
    index: FxHashMap<V, usize>,
    matrix: Vec<Vec<f64>>,
    positions: PositionIndex<V>,
    policy: P,
}

impl<V, P: Default> Default for AdjacencyMatrixGraph<V, P> {
    fn default() -> Self {
        Self::with_policy(P::default())
    }
}

impl<V, P: Default> AdjacencyMatrixGraph<V, P> {
    /// Create an empty graph with the policy's default settings
    pub fn new() -> Self {
        Self::default()
    }
}

impl<V, P> AdjacencyMatrixGraph<V, P> {
    /// Create an empty graph with an explicit edge policy
    pub fn with_policy(policy: P) -> Self {
        Self {
            vertices: Vec::new(),
            index: FxHashMap::default(),
            matrix: Vec::new(),
            positions: PositionIndex::default(),
            policy,
        }
    }

    /// The edge policy in use
    pub fn policy(&self) -> &P {
        &self.policy
    }
}

impl<V: Clone + Eq + Hash + Debug, P> AdjacencyMatrixGraph<V, P> {
    fn register(&mut self, vertex: &V) -> usize {
        if let Some(&idx) = self.index.get(vertex) {
            return idx;
        }

        let idx = self.vertices.len();
        self.vertices.push(vertex.clone());
        self.index.insert(vertex.clone(), idx);
        for row in &mut self.matrix {
            row.push(0.0);
        }
        self.matrix.push(vec![0.0; idx + 1]);
        idx
    }
}

impl<V, P> TextGraph for AdjacencyMatrixGraph<V, P>
where
    V: Clone + Eq + Hash + Debug,
    P: EdgePolicy<V>,
{
    type Vertex = V;

    fn vertices(&self) -> &[V] {
        &self.vertices
    }

    fn vertex_index(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    fn add_edge(&mut self, a: &V, b: &V) -> Result<()> {
        if a == b {
            return Err(RankError::self_edge(a));
        }
        let weight = checked_weight(self.policy.weight(a, b))?;

        let i = self.register(a);
        let j = self.register(b);
        self.matrix[i][j] = weight;
        self.matrix[j][i] = weight;
        Ok(())
    }

    fn weight_at(&self, i: usize, j: usize) -> f64 {
        self.matrix
            .get(i)
            .and_then(|row| row.get(j))
            .copied()
            .unwrap_or(0.0)
    }

    fn neighbors_at(&self, i: usize) -> Vec<(usize, f64)> {
        self.matrix
            .get(i)
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &w)| w > 0.0)
                    .map(|(j, &w)| (j, w))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn positions(&self) -> &PositionIndex<V> {
        &self.positions
    }

    fn positions_mut(&mut self) -> &mut PositionIndex<V> {
        &mut self.positions
    }
}
