//! Extractive summarization
//!
//! Sentences become vertices of a similarity graph. Each sentence passes an
//! equal share of its score to every sentence it overlaps with at all, so the
//! similarity value only decides whether an edge exists. The best sentences
//! are then put back into document order.

use crate::errors::Result;
use crate::graph::{SentenceGraph, SimilarityMatrix, TextGraph};
use crate::nlp::{SentenceEncoder, SentencePreprocessor};
use crate::rank::{RankResult, ScoreTable, TextRank};
use crate::types::{Normalization, RankConfig, Sentence};

/// TextRank over a sentence similarity graph
#[derive(Debug)]
pub struct TextRankSummarizer<'g, G: SentenceGraph = SimilarityMatrix> {
    ranker: TextRank<'g, G>,
}

impl<'g, G: SentenceGraph> TextRankSummarizer<'g, G> {
    /// Create a summarizer over a filled sentence graph
    pub fn new(graph: &'g G) -> Self {
        Self {
            ranker: TextRank::vanilla(graph).with_normalization(Normalization::NeighborCount),
        }
    }

    /// Take damping, iteration cap and threshold from a config
    pub fn with_config(mut self, config: &RankConfig) -> Self {
        self.ranker = self.ranker.with_config(config);
        self
    }

    /// Score every sentence
    pub fn train(&mut self) -> Result<RankResult> {
        self.ranker.train()
    }

    /// Sentence scores of the last run
    pub fn scores(&self) -> &ScoreTable<Sentence> {
        self.ranker.scores()
    }

    /// The `n` best sentences, best first
    pub fn get_top_sentences(&self, n: usize) -> Result<Vec<&Sentence>> {
        self.ranker.get_top_sentences(n)
    }

    /// The `n` best sentences in document order, one per line
    pub fn make_summary(&self, n: usize) -> Result<String> {
        Ok(assemble_summary(self.get_top_sentences(n)?))
    }
}

/// Sort sentences by position and join their texts with newlines
pub fn assemble_summary(mut sentences: Vec<&Sentence>) -> String {
    sentences.sort_by_key(|sentence| sentence.position());
    sentences
        .iter()
        .map(|sentence| sentence.text())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Summarize raw text into its `config.top_n` most central sentences.
///
/// When no two sentences can be compared (a single sentence, or only
/// duplicates) the graph stays empty and the leading sentences are returned.
pub fn summarize(
    text: &str,
    preprocessor: &SentencePreprocessor,
    config: &RankConfig,
) -> Result<String> {
    config.validate()?;
    trace_stage!("summarize");

    let sentences = preprocessor.get_sentences(text)?;
    let sentences = SentenceEncoder::new().encode_sentences(sentences);

    let mut graph = SimilarityMatrix::new();
    graph.fill_from_sentences(&sentences)?;

    if graph.is_empty() {
        return Ok(assemble_summary(
            sentences.iter().take(config.top_n).collect(),
        ));
    }

    let mut summarizer = TextRankSummarizer::new(&graph).with_config(config);
    let run = summarizer.train()?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        sentences = sentences.len(),
        iterations = run.iterations,
        converged = run.converged,
        "summary ranked"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = run;

    summarizer.make_summary(config.top_n)
}
