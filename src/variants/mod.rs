//! Ranking variants and graph backings
//!
//! - Vanilla: every vertex gets the same restart term
//! - PositionBiased: the restart term follows each vertex's position weight,
//!   favouring vertices that appear early and often
//!
//! Either variant runs over either backing; the choice of backing never
//! changes the ranking.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Restart term used by the ranker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    #[default]
    Vanilla,
    PositionBiased,
}

impl Variant {
    /// Both variants, vanilla first
    pub const ALL: [Variant; 2] = [Variant::Vanilla, Variant::PositionBiased];

    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "vanilla" | "textrank" | "text_rank" | "base" => Variant::Vanilla,
            "position_biased" | "positionbiased" | "position" | "position_rank"
            | "positionrank" => Variant::PositionBiased,
            _ => Variant::Vanilla,
        }
    }

    /// Canonical snake_case name
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Vanilla => "vanilla",
            Variant::PositionBiased => "position_biased",
        }
    }
}

impl std::str::FromStr for Variant {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Variant::parse(value))
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Graph storage strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backing {
    /// Dense adjacency matrix
    #[default]
    Matrix,
    /// Sparse per-vertex edge lists
    EdgeList,
}

impl Backing {
    /// Both backings, matrix first
    pub const ALL: [Backing; 2] = [Backing::Matrix, Backing::EdgeList];

    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "matrix" | "adjacency_matrix" | "dense" => Backing::Matrix,
            "edge_list" | "edgelist" | "edges" | "sparse" => Backing::EdgeList,
            _ => Backing::Matrix,
        }
    }

    /// Canonical snake_case name
    pub fn as_str(&self) -> &'static str {
        match self {
            Backing::Matrix => "matrix",
            Backing::EdgeList => "edge_list",
        }
    }
}

impl std::str::FromStr for Backing {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Backing::parse(value))
    }
}

impl fmt::Display for Backing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
