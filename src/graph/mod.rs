//! Graph construction and representation
//!
//! [`TextGraph`] is the capability contract shared by the two backings:
//! [`matrix::AdjacencyMatrixGraph`] (dense) and [`edge_list::EdgeListGraph`]
//! (sparse). Both produce identical answers for identical construction calls.
//! Edge weights come from an [`EdgePolicy`]: window co-occurrence for keyword
//! graphs, sentence similarity for sentence graphs.

pub mod csr;
pub mod edge_list;
pub mod matrix;
pub mod policy;
pub mod positions;

use crate::errors::{RankError, Result};
use crate::types::{Sentence, TokenId};
use std::fmt::Debug;
use std::hash::Hash;

pub use edge_list::EdgeListGraph;
pub use matrix::AdjacencyMatrixGraph;
pub use policy::{Cooccurrence, EdgePolicy, SentenceSimilarity, SimilarityMetric};
pub use positions::PositionIndex;

/// Dense keyword graph over token ids
pub type TokenMatrixGraph = AdjacencyMatrixGraph<TokenId, Cooccurrence>;
/// Sparse keyword graph over token ids
pub type TokenEdgeListGraph = EdgeListGraph<TokenId, Cooccurrence>;
/// Dense sentence graph weighted by similarity
pub type SimilarityMatrix = AdjacencyMatrixGraph<Sentence, SentenceSimilarity>;
/// Sparse sentence graph weighted by similarity
pub type SimilarityEdgeList = EdgeListGraph<Sentence, SentenceSimilarity>;

/// A weighted undirected graph over unique vertices.
///
/// Vertices get a stable index in the order they are first registered. The
/// required methods work on those indices; the provided methods add the
/// vertex-level API, which fails with [`RankError::UnknownVertex`] for
/// vertices that were never registered.
///
/// Implementations must keep the adjacency symmetric and report neighbours in
/// ascending index order, so that rankings over different backings sum in the
/// same order.
pub trait TextGraph {
    /// The vertex type (token id or sentence)
    type Vertex: Clone + Eq + Hash + Debug;

    /// All vertices in registration order
    fn vertices(&self) -> &[Self::Vertex];

    /// Index of a vertex, if registered
    fn vertex_index(&self, vertex: &Self::Vertex) -> Option<usize>;

    /// Add or overwrite the edge between two distinct vertices, registering
    /// them if needed. The weight comes from the graph's edge policy.
    fn add_edge(&mut self, a: &Self::Vertex, b: &Self::Vertex) -> Result<()>;

    /// Stored weight between two registered indices (0.0 when no edge)
    fn weight_at(&self, i: usize, j: usize) -> f64;

    /// Neighbours of an index with strictly positive weight, ascending by index
    fn neighbors_at(&self, i: usize) -> Vec<(usize, f64)>;

    /// Recorded occurrence positions
    fn positions(&self) -> &PositionIndex<Self::Vertex>;

    /// Mutable access to the recorded occurrence positions
    fn positions_mut(&mut self) -> &mut PositionIndex<Self::Vertex>;

    /// Number of registered vertices
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Check if the graph has no vertices
    fn is_empty(&self) -> bool {
        self.vertices().is_empty()
    }

    /// Number of undirected edges with positive weight
    fn edge_count(&self) -> usize {
        (0..self.vertex_count())
            .map(|i| self.neighbors_at(i).len())
            .sum::<usize>()
            / 2
    }

    /// Index of a vertex, failing for unknown vertices
    fn index_of(&self, vertex: &Self::Vertex) -> Result<usize> {
        self.vertex_index(vertex)
            .ok_or_else(|| RankError::unknown_vertex(vertex))
    }

    /// Edge weight between two vertices (0.0 when they are not connected)
    fn get_similarity_score(&self, a: &Self::Vertex, b: &Self::Vertex) -> Result<f64> {
        let i = self.index_of(a)?;
        let j = self.index_of(b)?;
        Ok(self.weight_at(i, j))
    }

    /// Vertices connected to `vertex` by a positive weight
    fn neighbors(&self, vertex: &Self::Vertex) -> Result<Vec<&Self::Vertex>> {
        let i = self.index_of(vertex)?;
        let vertices = self.vertices();
        Ok(self
            .neighbors_at(i)
            .into_iter()
            .map(|(j, _)| &vertices[j])
            .collect())
    }

    /// Number of neighbours with strictly positive edge weight
    fn calculate_inout_score(&self, vertex: &Self::Vertex) -> Result<usize> {
        let i = self.index_of(vertex)?;
        Ok(self.neighbors_at(i).len())
    }

    /// Sum of the vertex's edge weights
    fn weighted_degree(&self, vertex: &Self::Vertex) -> Result<f64> {
        let i = self.index_of(vertex)?;
        Ok(self.neighbors_at(i).iter().map(|(_, w)| w).sum())
    }

    /// Connect every distinct pair of tokens that share a window of
    /// `window_size` consecutive tokens.
    ///
    /// A sequence shorter than the window is treated as one window, so
    /// `[1, 2]` with a window of 3 still links 1 and 2 even though no full
    /// window of 3 tokens exists. Sequences of at least `window_size` tokens
    /// only link tokens that share a full window.
    fn fill_from_tokens(&mut self, tokens: &[Self::Vertex], window_size: usize) -> Result<()> {
        if window_size < 2 {
            return Err(RankError::invalid_argument(format!(
                "window_size must be >= 2, got {}",
                window_size
            )));
        }
        if tokens.is_empty() {
            return Err(RankError::empty_input("no tokens to build the graph from"));
        }

        trace_stage!("fill_from_tokens");

        let span = window_size.min(tokens.len());
        for window in tokens.windows(span) {
            for (offset, a) in window.iter().enumerate() {
                for b in &window[offset + 1..] {
                    if a != b {
                        self.add_edge(a, b)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Record the 0-based occurrence indices of every token, replacing any
    /// previous record
    fn fill_positions(&mut self, tokens: &[Self::Vertex]) -> Result<()> {
        self.positions_mut().fill(tokens)
    }

    /// Derive normalized position weights from the recorded positions
    fn calculate_position_weights(&mut self) -> Result<()> {
        self.positions_mut().calculate_weights()
    }

    /// Position weight of a vertex
    fn position_weight(&self, vertex: &Self::Vertex) -> Result<f64> {
        self.positions().weight(vertex)
    }
}

/// Sentence-graph construction, available to any backing over [`Sentence`]
/// vertices.
pub trait SentenceGraph: TextGraph<Vertex = Sentence> {
    /// Connect every pair of sentences whose encoded content differs. Pairs
    /// with identical encodings are skipped, which keeps duplicate sentences
    /// from forming self-loops by content.
    fn fill_from_sentences(&mut self, sentences: &[Sentence]) -> Result<()> {
        if sentences.is_empty() {
            return Err(RankError::empty_input(
                "no sentences to build the graph from",
            ));
        }

        trace_stage!("fill_from_sentences");

        for (offset, sentence) in sentences.iter().enumerate() {
            for other in &sentences[offset + 1..] {
                if sentence.encoded() != other.encoded() {
                    self.add_edge(sentence, other)?;
                }
            }
        }

        Ok(())
    }
}

impl<G: TextGraph<Vertex = Sentence>> SentenceGraph for G {}

/// Reject weights that are negative or not finite
pub(crate) fn checked_weight(weight: f64) -> Result<f64> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(weight)
    } else {
        Err(RankError::invalid_argument(format!(
            "edge weight must be finite and non-negative, got {}",
            weight
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(position: usize, encoded: &[TokenId]) -> Sentence {
        Sentence::new(format!("Sentence {}.", position), position).with_encoded(encoded.to_vec())
    }

    fn check_window_scenario<G: TextGraph<Vertex = TokenId>>(mut graph: G) {
        graph.fill_from_tokens(&[1, 2, 3, 2, 1], 3).unwrap();

        assert_eq!(graph.vertices(), &[1, 2, 3]);
        assert_eq!(graph.edge_count(), 3);
        for (a, b) in [(1, 2), (2, 3), (1, 3)] {
            assert_eq!(graph.get_similarity_score(&a, &b).unwrap(), 1.0);
            assert_eq!(graph.get_similarity_score(&b, &a).unwrap(), 1.0);
        }
        for v in [1, 2, 3] {
            assert_eq!(graph.calculate_inout_score(&v).unwrap(), 2);
        }
    }

    #[test]
    fn test_window_scenario_both_backings() {
        check_window_scenario(TokenMatrixGraph::new());
        check_window_scenario(TokenEdgeListGraph::new());
    }

    #[test]
    fn test_window_excludes_distant_tokens() {
        let mut graph = TokenEdgeListGraph::new();
        graph.fill_from_tokens(&[1, 2, 3, 4], 2).unwrap();

        assert_eq!(graph.get_similarity_score(&1, &2).unwrap(), 1.0);
        assert_eq!(graph.get_similarity_score(&1, &3).unwrap(), 0.0);
        assert_eq!(graph.get_similarity_score(&1, &4).unwrap(), 0.0);
        assert_eq!(graph.calculate_inout_score(&1).unwrap(), 1);
        assert_eq!(graph.calculate_inout_score(&2).unwrap(), 2);
    }

    #[test]
    fn test_short_sequence_forms_one_window() {
        let mut graph = TokenMatrixGraph::new();
        graph.fill_from_tokens(&[7, 8], 5).unwrap();
        assert_eq!(graph.get_similarity_score(&7, &8).unwrap(), 1.0);

        let mut graph = TokenEdgeListGraph::new();
        graph.fill_from_tokens(&[1, 2], 3).unwrap();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_fill_from_tokens_rejects_bad_input() {
        let mut graph = TokenMatrixGraph::new();
        assert!(matches!(
            graph.fill_from_tokens(&[1, 2], 1),
            Err(RankError::InvalidArgument { .. })
        ));
        assert!(matches!(
            graph.fill_from_tokens(&[], 3),
            Err(RankError::EmptyInput { .. })
        ));
    }

    #[test]
    fn test_unknown_vertex_queries_fail() {
        let mut graph = TokenEdgeListGraph::new();
        graph.add_edge(&1, &2).unwrap();

        assert!(matches!(
            graph.calculate_inout_score(&9),
            Err(RankError::UnknownVertex { .. })
        ));
        assert!(graph.get_similarity_score(&1, &9).is_err());
        assert!(graph.neighbors(&9).is_err());
        assert!(graph.weighted_degree(&9).is_err());
    }

    #[test]
    fn test_sentence_scenario() {
        let a = sentence(0, &[1000, 1001, 1002]);
        let b = sentence(1, &[1001, 1002, 1003]);

        let mut graph = SimilarityMatrix::new();
        graph.fill_from_sentences(&[a.clone(), b.clone()]).unwrap();

        assert!((graph.get_similarity_score(&a, &b).unwrap() - 0.5).abs() < 1e-12);
        assert_eq!(graph.calculate_inout_score(&a).unwrap(), 1);
        assert_eq!(graph.calculate_inout_score(&b).unwrap(), 1);
    }

    #[test]
    fn test_duplicate_sentences_not_linked() {
        let a = sentence(0, &[1000, 1001]);
        let b = sentence(1, &[1000, 1001]);
        let c = sentence(2, &[1001, 1002]);

        let mut graph = SimilarityEdgeList::new();
        graph.fill_from_sentences(&[a.clone(), b.clone(), c.clone()]).unwrap();

        assert_eq!(graph.get_similarity_score(&a, &b).unwrap(), 0.0);
        assert!(graph.get_similarity_score(&a, &c).unwrap() > 0.0);
        assert!(graph.get_similarity_score(&b, &c).unwrap() > 0.0);
    }

    #[test]
    fn test_zero_similarity_is_not_a_neighbor() {
        let a = sentence(0, &[1000]);
        let b = sentence(1, &[1001]);

        let mut graph = SimilarityMatrix::new();
        graph.fill_from_sentences(&[a.clone(), b.clone()]).unwrap();

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.calculate_inout_score(&a).unwrap(), 0);
        assert!(graph.neighbors(&a).unwrap().is_empty());
    }

    #[test]
    fn test_fill_from_sentences_rejects_empty() {
        let mut graph = SimilarityMatrix::new();
        assert!(graph.fill_from_sentences(&[]).unwrap_err().is_empty_input());
    }

    #[test]
    fn test_checked_weight() {
        assert!(checked_weight(0.0).is_ok());
        assert!(checked_weight(-0.1).is_err());
        assert!(checked_weight(f64::NAN).is_err());
    }
}
