//! # graph_textrank
//!
//! Graph-based ranking for keyword extraction and extractive summarization.
//!
//! Tokens (or sentences) become vertices of a weighted undirected graph, and a
//! damped power iteration assigns each vertex an importance score. The top
//! scored vertices are the keywords, or the sentences of the summary.
//!
//! ## Features
//!
//! - **Two graph backings**: a dense adjacency matrix and a sparse edge list,
//!   interchangeable behind [`graph::TextGraph`] and giving identical rankings
//! - **Two variants**: vanilla TextRank and position-biased TextRank, which
//!   favours vertices that occur early and often
//! - **Summarization**: sentence graphs weighted by Jaccard similarity
//! - **Deterministic**: exact score ties resolve by registration order
//!
//! ```
//! use graph_textrank::graph::{TextGraph, TokenMatrixGraph};
//! use graph_textrank::rank::TextRank;
//!
//! let mut graph = TokenMatrixGraph::new();
//! graph.fill_from_tokens(&[1, 2, 3, 2, 1], 3).unwrap();
//!
//! let mut ranker = TextRank::vanilla(&graph);
//! ranker.train().unwrap();
//! assert_eq!(ranker.get_top_keywords(3).unwrap().len(), 3);
//! ```

/// Enter a tracing span for a pipeline stage when the `tracing` feature is on.
/// Compiles to nothing otherwise.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("textrank_stage", stage = $name).entered();
    };
}

pub mod errors;
pub mod graph;
pub mod keywords;
pub mod nlp;
pub mod rank;
pub mod similarity;
pub mod summarizer;
pub mod types;
pub mod variants;

// Re-export commonly used types
pub use errors::{RankError, Result};
pub use types::{Normalization, RankConfig, Sentence, TokenId};

// Re-export main functionality
pub use graph::{
    csr::CsrGraph, AdjacencyMatrixGraph, EdgeListGraph, SentenceGraph, SimilarityEdgeList,
    SimilarityMatrix, TextGraph, TokenEdgeListGraph, TokenMatrixGraph,
};
pub use keywords::{KeywordExtractor, KeywordReport};
pub use nlp::{
    encoder::{SentenceEncoder, TextEncoder},
    preprocess::{SentencePreprocessor, TextPreprocessor},
};
pub use rank::{PositionBiasedTextRank, RankResult, ScoreTable, TextRank, VanillaTextRank};
pub use similarity::calculate_similarity;
pub use summarizer::TextRankSummarizer;
pub use variants::{Backing, Variant};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
