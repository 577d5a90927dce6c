//! Keyword extraction
//!
//! Ties the pieces together: encode tokens, build a co-occurrence graph on the
//! chosen backing, rank it with the chosen variant and decode the winners.

use crate::errors::{RankError, Result};
use crate::graph::{TextGraph, TokenEdgeListGraph, TokenMatrixGraph};
use crate::nlp::TextEncoder;
use crate::rank::{RankResult, TextRank};
use crate::types::{RankConfig, TokenId};
use crate::variants::{Backing, Variant};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Keywords produced by one backing x variant combination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordReport {
    /// Restart variant used for ranking
    pub variant: Variant,
    /// Graph backing the tokens were stored in
    pub backing: Backing,
    /// Decoded keywords, best first
    pub keywords: Vec<String>,
    /// Convergence information of the ranking run
    pub run: RankResult,
}

/// Ranked token ids plus the run that produced them
#[derive(Debug, Clone, PartialEq)]
pub struct RankedIds {
    /// Top token ids, best first
    pub ids: Vec<TokenId>,
    /// Convergence information of the ranking run
    pub run: RankResult,
}

/// Extracts keywords from preprocessed token sequences
#[derive(Debug, Clone, Default)]
pub struct KeywordExtractor {
    config: RankConfig,
    variant: Variant,
    backing: Backing,
}

impl KeywordExtractor {
    /// Create an extractor with the given config, vanilla variant and
    /// matrix backing
    pub fn new(config: RankConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Builder method: set the ranking variant
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Builder method: set the graph backing
    pub fn with_backing(mut self, backing: Backing) -> Self {
        self.backing = backing;
        self
    }

    /// The ranking config
    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    /// The ranking variant
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The graph backing
    pub fn backing(&self) -> Backing {
        self.backing
    }

    /// Rank an already encoded token sequence and return the top ids.
    ///
    /// A sequence without two distinct tokens has no edges and yields no
    /// keywords.
    pub fn extract_ids(&self, encoded: &[TokenId]) -> Result<RankedIds> {
        self.config.validate()?;
        match self.backing {
            Backing::Matrix => self.rank_on::<TokenMatrixGraph>(encoded),
            Backing::EdgeList => self.rank_on::<TokenEdgeListGraph>(encoded),
        }
    }

    /// Encode `tokens`, rank them and decode the top `top_n` keywords
    pub fn extract<S: AsRef<str>>(
        &self,
        tokens: &[S],
        encoder: &mut TextEncoder,
    ) -> Result<KeywordReport> {
        let encoded = encoder.encode(tokens)?;
        let ranked = self.extract_ids(&encoded)?;
        self.report(ranked, encoder)
    }

    /// Run every backing x variant combination over the same tokens.
    ///
    /// Combinations are ranked in parallel; the reports come back ordered
    /// backing-major (matrix first, vanilla first).
    pub fn compare_all<S: AsRef<str>>(
        &self,
        tokens: &[S],
        encoder: &mut TextEncoder,
    ) -> Result<Vec<KeywordReport>> {
        trace_stage!("compare_all");
        let encoded = encoder.encode(tokens)?;

        let combinations: Vec<KeywordExtractor> = Backing::ALL
            .into_iter()
            .flat_map(|backing| {
                Variant::ALL
                    .into_iter()
                    .map(move |variant| self.clone().with_backing(backing).with_variant(variant))
            })
            .collect();

        let ranked: Vec<(KeywordExtractor, RankedIds)> = combinations
            .into_par_iter()
            .map(|extractor| {
                let ranked = extractor.extract_ids(&encoded)?;
                Ok::<_, RankError>((extractor, ranked))
            })
            .collect::<Result<_>>()?;

        ranked
            .into_iter()
            .map(|(extractor, ranked)| extractor.report(ranked, encoder))
            .collect()
    }

    fn report(&self, ranked: RankedIds, encoder: &TextEncoder) -> Result<KeywordReport> {
        Ok(KeywordReport {
            variant: self.variant,
            backing: self.backing,
            keywords: encoder.decode(&ranked.ids)?,
            run: ranked.run,
        })
    }

    fn rank_on<G>(&self, encoded: &[TokenId]) -> Result<RankedIds>
    where
        G: TextGraph<Vertex = TokenId> + Default,
    {
        let mut graph = G::default();
        graph.fill_from_tokens(encoded, self.config.window_size)?;

        let (ids, run) = match self.variant {
            Variant::Vanilla => {
                let mut ranker = TextRank::vanilla(&graph).with_config(&self.config);
                let run = ranker.train()?;
                (ranker.get_top_keywords(self.config.top_n)?, run)
            }
            Variant::PositionBiased => {
                if !graph.is_empty() {
                    graph.fill_positions(encoded)?;
                    graph.calculate_position_weights()?;
                }
                let mut ranker = TextRank::position_biased(&graph).with_config(&self.config);
                let run = ranker.train()?;
                (ranker.get_top_keywords(self.config.top_n)?, run)
            }
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            variant = %self.variant,
            backing = %self.backing,
            keywords = ids.len(),
            "keywords extracted"
        );

        Ok(RankedIds { ids, run })
    }
}
