//! Restart-term strategies
//!
//! The restart term is the share of score a vertex receives regardless of its
//! neighbours: `(1 - damping) * restart(v)`. Vanilla TextRank uses 1 for every
//! vertex; the position-biased variant uses each vertex's position weight.

use crate::errors::{RankError, Result};
use crate::graph::TextGraph;

/// Produces the per-vertex restart factor, in registration order
pub trait RestartStrategy {
    /// Restart factors for every vertex of `graph`
    fn restart_vector<G: TextGraph>(&self, graph: &G) -> Result<Vec<f64>>;
}

/// Uniform restart: every vertex gets factor 1
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformRestart;

impl RestartStrategy for UniformRestart {
    fn restart_vector<G: TextGraph>(&self, graph: &G) -> Result<Vec<f64>> {
        Ok(vec![1.0; graph.vertex_count()])
    }
}

/// Position-weighted restart, biasing towards early and frequent vertices.
///
/// Requires `calculate_position_weights` to have run on a non-empty graph,
/// and every vertex to have recorded positions.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionRestart;

impl RestartStrategy for PositionRestart {
    fn restart_vector<G: TextGraph>(&self, graph: &G) -> Result<Vec<f64>> {
        if graph.is_empty() {
            return Ok(Vec::new());
        }
        if !graph.positions().is_weighted() {
            return Err(RankError::invalid_argument(
                "position-biased ranking needs calculated position weights",
            ));
        }

        graph
            .vertices()
            .iter()
            .map(|vertex| graph.position_weight(vertex))
            .collect()
    }
}
