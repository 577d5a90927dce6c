//! Error types for graph_textrank
//!
//! Every failure is a local precondition violation reported to the immediate
//! caller. Nothing is retried internally, and an iteration budget running out
//! during training is reported through the ranking result, not as an error.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, RankError>;

/// Main error type for graph_textrank
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RankError {
    /// Wrong shape or value of an argument (zero top-N, window below 2, ...)
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A vertex (or token id) that was never registered
    #[error("Unknown vertex: {vertex}")]
    UnknownVertex { vertex: String },

    /// An edge from a vertex to itself
    #[error("Self edge rejected for vertex {vertex}")]
    SelfEdge { vertex: String },

    /// No tokens or sentences were supplied to a fill operation
    #[error("Empty input: {message}")]
    EmptyInput { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl RankError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an unknown vertex error from the vertex's debug form
    pub fn unknown_vertex(vertex: impl std::fmt::Debug) -> Self {
        Self::UnknownVertex {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create a self edge error from the vertex's debug form
    pub fn self_edge(vertex: impl std::fmt::Debug) -> Self {
        Self::SelfEdge {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an empty input error
    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::EmptyInput {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Check if this error is an empty input signal, which callers usually
    /// treat as "skip ranking" rather than a failure
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput { .. })
    }
}

impl From<serde_json::Error> for RankError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
