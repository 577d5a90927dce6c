//! Core types for graph_textrank
//!
//! This module defines the vertex types shared by keyword and sentence graphs,
//! the immutable sentence record, and the ranking configuration.

use crate::errors::{RankError, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Token ids
// ============================================================================

/// Integer id of an encoded token; the vertex type of keyword graphs.
pub type TokenId = u32;

/// First id handed out by the keyword encoder.
pub const FIRST_TOKEN_ID: TokenId = 1;

/// First id handed out by the sentence encoder. Kept apart from keyword ids
/// so the two id spaces never collide.
pub const FIRST_SENTENCE_TOKEN_ID: TokenId = 1000;

// ============================================================================
// Sentence
// ============================================================================

/// A sentence of the source text, the vertex type of sentence graphs.
///
/// A sentence is created once from its raw text and position, then enriched
/// with its preprocessed tokens and finally its encoded tokens. The builder
/// methods consume the sentence, so a finished sentence cannot be changed.
/// Equality is by value: two sentences with the same text at different
/// positions are different vertices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sentence {
    text: String,
    position: usize,
    #[serde(default)]
    preprocessed: Vec<String>,
    #[serde(default)]
    encoded: Vec<TokenId>,
}

impl Sentence {
    /// Create a sentence from its raw text and its 0-based position
    pub fn new(text: impl Into<String>, position: usize) -> Self {
        Self {
            text: text.into(),
            position,
            preprocessed: Vec::new(),
            encoded: Vec::new(),
        }
    }

    /// Attach the preprocessed tokens
    pub fn with_preprocessed(mut self, tokens: Vec<String>) -> Self {
        self.preprocessed = tokens;
        self
    }

    /// Attach the encoded tokens
    pub fn with_encoded(mut self, ids: Vec<TokenId>) -> Self {
        self.encoded = ids;
        self
    }

    /// The raw sentence text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Order of appearance in the source document
    pub fn position(&self) -> usize {
        self.position
    }

    /// Preprocessed tokens (empty until preprocessing ran)
    pub fn preprocessed(&self) -> &[String] {
        &self.preprocessed
    }

    /// Encoded tokens (empty until encoding ran)
    pub fn encoded(&self) -> &[TokenId] {
        &self.encoded
    }
}

// ============================================================================
// Normalization
// ============================================================================

/// How a neighbour's score is divided before it is passed along an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// `weight(u, v) / sum of u's edge weights`, used for keyword graphs.
    #[default]
    WeightedDegree,
    /// `1 / inout_score(u)`: the edge weight only gates membership. Used for
    /// sentence graphs.
    NeighborCount,
}

// ============================================================================
// Configuration
// ============================================================================

fn default_damping() -> f64 {
    0.85
}

fn default_max_iterations() -> usize {
    50
}

fn default_threshold() -> f64 {
    0.0001
}

fn default_window() -> usize {
    3
}

fn default_top_n() -> usize {
    10
}

/// Check the power-iteration parameters shared by [`RankConfig`] and the
/// ranker. A threshold of 0 is allowed and only stops on an exact fixed point.
pub(crate) fn validate_iteration(
    damping: f64,
    max_iterations: usize,
    convergence_threshold: f64,
) -> Result<()> {
    if !(0.0..=1.0).contains(&damping) {
        return Err(RankError::invalid_argument(format!(
            "damping must be between 0 and 1, got {}",
            damping
        )));
    }

    if max_iterations == 0 {
        return Err(RankError::invalid_argument("max_iterations must be > 0"));
    }

    if convergence_threshold.is_nan() || convergence_threshold < 0.0 {
        return Err(RankError::invalid_argument(
            "convergence_threshold must be >= 0",
        ));
    }

    Ok(())
}

/// Configuration for ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    /// Damping factor (probability of following an edge)
    #[serde(default = "default_damping")]
    pub damping: f64,
    /// Iteration cap; reaching it without convergence is not an error
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Stop once the summed absolute score change is at most this value
    #[serde(default = "default_threshold")]
    pub convergence_threshold: f64,
    /// Sliding window size for co-occurrence graphs
    #[serde(default = "default_window")]
    pub window_size: usize,
    /// Number of keywords or sentences to return
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            max_iterations: default_max_iterations(),
            convergence_threshold: default_threshold(),
            window_size: default_window(),
            top_n: default_top_n(),
        }
    }
}

impl RankConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        validate_iteration(self.damping, self.max_iterations, self.convergence_threshold)?;

        if self.window_size < 2 {
            return Err(RankError::invalid_argument("window_size must be >= 2"));
        }

        if self.top_n == 0 {
            return Err(RankError::invalid_argument("top_n must be > 0"));
        }

        Ok(())
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Builder method: set window size
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Builder method: set top N
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }
}
