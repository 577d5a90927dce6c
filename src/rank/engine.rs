//! The TextRank power iteration
//!
//! Every vertex starts at score 1.0. Each iteration recomputes all scores from
//! the previous iteration's snapshot:
//!
//! `score(v) = d * sum_{u in N(v)} share(u, v) * prev(u) + (1 - d) * restart(v)`
//!
//! where `share(u, v)` is `w(u, v) / sum_w w(u, w)` under
//! [`Normalization::WeightedDegree`] and `1 / inout(u)` under
//! [`Normalization::NeighborCount`]. Iteration stops once the summed absolute
//! change is at most the threshold, or at the iteration cap.

use super::restart::{PositionRestart, RestartStrategy, UniformRestart};
use super::{RankResult, ScoreTable};
use crate::errors::Result;
use crate::graph::csr::CsrGraph;
use crate::graph::TextGraph;
use crate::types::{validate_iteration, Normalization, RankConfig, Sentence, TokenId};

/// TextRank over a borrowed, frozen graph.
///
/// The ranker owns its score table and only reads the graph, so several
/// rankers can share one graph.
#[derive(Debug)]
pub struct TextRank<'g, G: TextGraph, R = UniformRestart> {
    graph: &'g G,
    restart: R,
    damping: f64,
    max_iterations: usize,
    threshold: f64,
    normalization: Normalization,
    scores: ScoreTable<G::Vertex>,
    last_run: Option<RankResult>,
}

/// TextRank with a uniform restart term
pub type VanillaTextRank<'g, G> = TextRank<'g, G, UniformRestart>;

/// TextRank with a position-weighted restart term
pub type PositionBiasedTextRank<'g, G> = TextRank<'g, G, PositionRestart>;

impl<'g, G: TextGraph> TextRank<'g, G, UniformRestart> {
    /// Vanilla TextRank with default settings
    pub fn vanilla(graph: &'g G) -> Self {
        Self::new(graph, UniformRestart)
    }
}

impl<'g, G: TextGraph> TextRank<'g, G, PositionRestart> {
    /// Position-biased TextRank with default settings
    pub fn position_biased(graph: &'g G) -> Self {
        Self::new(graph, PositionRestart)
    }
}

impl<'g, G: TextGraph, R: RestartStrategy> TextRank<'g, G, R> {
    /// Create a ranker with the default damping (0.85), iteration cap (50)
    /// and threshold (0.0001)
    pub fn new(graph: &'g G, restart: R) -> Self {
        let defaults = RankConfig::default();
        Self {
            graph,
            restart,
            damping: defaults.damping,
            max_iterations: defaults.max_iterations,
            threshold: defaults.convergence_threshold,
            normalization: Normalization::default(),
            scores: ScoreTable::default(),
            last_run: None,
        }
    }

    /// Take damping, iteration cap and threshold from a config
    pub fn with_config(mut self, config: &RankConfig) -> Self {
        self.damping = config.damping;
        self.max_iterations = config.max_iterations;
        self.threshold = config.convergence_threshold;
        self
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set how neighbour scores are normalized
    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// The graph being ranked
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// Scores of the last training run (empty before training)
    pub fn scores(&self) -> &ScoreTable<G::Vertex> {
        &self.scores
    }

    /// Score of one vertex after training
    pub fn score(&self, vertex: &G::Vertex) -> Option<f64> {
        self.scores.get(vertex)
    }

    /// Outcome of the last training run
    pub fn last_run(&self) -> Option<&RankResult> {
        self.last_run.as_ref()
    }

    /// Run the iteration from scratch.
    ///
    /// Always starts from 1.0 per vertex, so training twice on an unchanged
    /// graph gives identical scores. Hitting the iteration cap is reported via
    /// `converged = false`, not as an error.
    pub fn train(&mut self) -> Result<RankResult> {
        validate_iteration(self.damping, self.max_iterations, self.threshold)?;
        trace_stage!("train");

        let csr = CsrGraph::from_graph(self.graph);
        let restart = self.restart.restart_vector(self.graph)?;
        let n = csr.num_nodes;

        let mut scores = vec![1.0; n];
        let mut next = vec![0.0; n];
        let mut iterations = 0;
        let mut delta = 0.0;
        let mut converged = n == 0;

        while !converged && iterations < self.max_iterations {
            iterations += 1;

            for (v, slot) in next.iter_mut().enumerate() {
                let incoming: f64 = csr
                    .neighbors(v)
                    .map(|(u, weight)| self.share(&csr, u, weight) * scores[u])
                    .sum();
                *slot = self.damping * incoming + (1.0 - self.damping) * restart[v];
            }

            delta = scores
                .iter()
                .zip(next.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut next);
            converged = delta <= self.threshold;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            vertices = n,
            iterations,
            delta,
            converged,
            "textrank training finished"
        );

        self.scores = ScoreTable::new(self.graph.vertices().to_vec(), scores);
        let result = RankResult::new(iterations, delta, converged);
        self.last_run = Some(result);
        Ok(result)
    }

    /// Fraction of `u`'s score passed along the edge `u -- v`
    #[inline]
    fn share(&self, csr: &CsrGraph, u: usize, weight: f64) -> f64 {
        match self.normalization {
            Normalization::WeightedDegree => weight / csr.node_total_weight(u),
            Normalization::NeighborCount => 1.0 / csr.degree(u) as f64,
        }
    }

    /// The `n` best vertices of the last training run, best first
    pub fn top_vertices(&self, n: usize) -> Result<Vec<&G::Vertex>> {
        Ok(self
            .scores
            .top_n(n)?
            .into_iter()
            .map(|(vertex, _)| vertex)
            .collect())
    }
}

impl<'g, G, R> TextRank<'g, G, R>
where
    G: TextGraph<Vertex = TokenId>,
    R: RestartStrategy,
{
    /// Top `n` token ids by score; ties keep registration order
    pub fn get_top_keywords(&self, n: usize) -> Result<Vec<TokenId>> {
        Ok(self.top_vertices(n)?.into_iter().copied().collect())
    }
}

impl<'g, G, R> TextRank<'g, G, R>
where
    G: TextGraph<Vertex = Sentence>,
    R: RestartStrategy,
{
    /// Top `n` sentences by score; ties keep registration order
    pub fn get_top_sentences(&self, n: usize) -> Result<Vec<&Sentence>> {
        self.top_vertices(n)
    }
}
