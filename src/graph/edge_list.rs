//! Sparse edge-list backing
//!
//! Each vertex keeps a hash map from neighbour index to edge weight, so
//! memory grows with the number of edges rather than the square of the
//! vertex count.

use super::policy::{Cooccurrence, EdgePolicy};
use super::positions::PositionIndex;
use super::{checked_weight, TextGraph};
use crate::errors::{RankError, Result};
use rustc_hash::FxHashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Graph backed by per-vertex adjacency lists
#[derive(Debug, Clone)]
pub struct EdgeListGraph<V, P = Cooccurrence> {
    vertices: Vec<V>,
    index: FxHashMap<V, usize>,
    /// Per vertex index: neighbour index -> edge weight
    adjacency: Vec<FxHashMap<usize, f64>>,
    positions: PositionIndex<V>,
    policy: P,
}

impl<V, P: Default> Default for EdgeListGraph<V, P> {
    fn default() -> Self {
        Self::with_policy(P::default())
    }
}

impl<V, P: Default> EdgeListGraph<V, P> {
    /// Create an empty graph with the policy's default settings
    pub fn new() -> Self {
        Self::default()
    }
}

impl<V, P> EdgeListGraph<V, P> {
    /// Create an empty graph with an explicit edge policy
    pub fn with_policy(policy: P) -> Self {
        Self {
            vertices: Vec::new(),
            index: FxHashMap::default(),
            adjacency: Vec::new(),
            positions: PositionIndex::default(),
            policy,
        }
    }

    /// The edge policy in use
    pub fn policy(&self) -> &P {
        &self.policy
    }
}

impl<V: Clone + Eq + Hash + Debug, P> EdgeListGraph<V, P> {
    fn register(&mut self, vertex: &V) -> usize {
        if let Some(&idx) = self.index.get(vertex) {
            return idx;
        }

        let idx = self.vertices.len();
        self.index.insert(vertex.clone(), idx);
        self.vertices.push(vertex.clone());
        self.adjacency.push(FxHashMap::default());
        idx
    }
}

impl<V, P> TextGraph for EdgeListGraph<V, P>
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
        // Overwrite in both directions (undirected graph)
        self.adjacency[i].insert(j, weight);
        self.adjacency[j].insert(i, weight);
        Ok(())
    }

    fn weight_at(&self, i: usize, j: usize) -> f64 {
        self.adjacency
            .get(i)
            .and_then(|edges| edges.get(&j))
            .copied()
            .unwrap_or(0.0)
    }

    fn neighbors_at(&self, i: usize) -> Vec<(usize, f64)> {
        let Some(edges) = self.adjacency.get(i) else {
            return Vec::new();
        };

        // Sort for deterministic iteration, matching the dense backing
        let mut edges: Vec<_> = edges
            .iter()
            .filter(|&(_, &w)| w > 0.0)
            .map(|(&j, &w)| (j, w))
            .collect();
        edges.sort_by_key(|(j, _)| *j);
        edges
    }

    fn positions(&self) -> &PositionIndex<V> {
        &self.positions
    }

    fn positions_mut(&mut self) -> &mut PositionIndex<V> {
        &mut self.positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::policy::SentenceSimilarity;
    use crate::types::{Sentence, TokenId};

    #[test]
    fn test_edge_list_basic() {
        let mut graph: EdgeListGraph<TokenId> = EdgeListGraph::new();
        graph.add_edge(&4, &5).unwrap();
        graph.add_edge(&5, &6).unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.vertices()[1], 5);
        assert_eq!(graph.vertex_index(&5), Some(1));
        assert_eq!(graph.neighbors_at(1), vec![(0, 1.0), (2, 1.0)]);
    }

    #[test]
    fn test_vertex_slots_stay_aligned() {
        let mut graph: EdgeListGraph<TokenId> = EdgeListGraph::new();
        graph.fill_from_tokens(&[9, 3, 9, 7, 3, 1], 2).unwrap();

        for (idx, vertex) in graph.vertices().iter().enumerate() {
            assert_eq!(graph.vertex_index(vertex), Some(idx));
        }
        assert_eq!(graph.adjacency.len(), graph.vertex_count());
    }

    #[test]
    fn test_no_accumulation() {
        let mut graph: EdgeListGraph<TokenId> = EdgeListGraph::new();
        graph.add_edge(&1, &2).unwrap();
        graph.add_edge(&1, &2).unwrap();
        graph.add_edge(&2, &1).unwrap();

        assert_eq!(graph.weight_at(0, 1), 1.0);
        assert_eq!(graph.weight_at(1, 0), 1.0);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_self_edge_rejected() {
        let mut graph: EdgeListGraph<TokenId> = EdgeListGraph::new();
        let err = graph.add_edge(&3, &3).unwrap_err();
        assert_eq!(err, RankError::self_edge(3u32));
    }

    #[test]
    fn test_zero_weight_stored_but_not_a_neighbor() {
        let mut graph = EdgeListGraph::with_policy(SentenceSimilarity::default());
        let a = Sentence::new("a", 0).with_encoded(vec![1000]);
        let b = Sentence::new("b", 1).with_encoded(vec![1001]);
        graph.add_edge(&a, &b).unwrap();

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.adjacency[0].len(), 1);
        assert!(graph.neighbors_at(0).is_empty());
        assert_eq!(graph.calculate_inout_score(&a).unwrap(), 0);
    }

    #[test]
    fn test_neighbors_sorted_by_index() {
        let mut graph: EdgeListGraph<TokenId> = EdgeListGraph::new();
        for other in [9, 8, 7, 6] {
            graph.add_edge(&1, &other).unwrap();
        }
        let idx: Vec<usize> = graph.neighbors_at(0).into_iter().map(|(j, _)| j).collect();
        assert_eq!(idx, vec![1, 2, 3, 4]);
    }
}
