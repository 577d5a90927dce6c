//! Word <-> id encoders
//!
//! Words are interned once as `Arc<str>` and mapped to consecutive ids in
//! order of first appearance, so encoding the same text twice yields the
//! same ids.

use crate::errors::{RankError, Result};
use crate::types::{Sentence, TokenId, FIRST_SENTENCE_TOKEN_ID, FIRST_TOKEN_ID};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Bidirectional mapping between words and token ids
#[derive(Debug, Clone)]
pub struct TextEncoder {
    word_to_id: FxHashMap<Arc<str>, TokenId>,
    id_to_word: FxHashMap<TokenId, Arc<str>>,
    next_id: TokenId,
}

impl Default for TextEncoder {
    fn default() -> Self {
        Self::starting_at(FIRST_TOKEN_ID)
    }
}

impl TextEncoder {
    /// Create an encoder handing out ids from 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder handing out ids from `first_id`
    pub fn starting_at(first_id: TokenId) -> Self {
        Self {
            word_to_id: FxHashMap::default(),
            id_to_word: FxHashMap::default(),
            next_id: first_id,
        }
    }

    /// Id of `word`, assigning the next free id if it is new
    pub fn lookup_or_insert(&mut self, word: &str) -> TokenId {
        if let Some(&id) = self.word_to_id.get(word) {
            return id;
        }

        let id = self.next_id;
        let word: Arc<str> = word.into();
        self.word_to_id.insert(word.clone(), id);
        self.id_to_word.insert(id, word);
        self.next_id += 1;
        id
    }

    /// Encode a token sequence, learning new words on the way
    pub fn encode<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<Vec<TokenId>> {
        if tokens.is_empty() {
            return Err(RankError::empty_input("nothing to encode"));
        }
        Ok(tokens
            .iter()
            .map(|token| self.lookup_or_insert(token.as_ref()))
            .collect())
    }

    /// Decode ids back to words
    pub fn decode(&self, ids: &[TokenId]) -> Result<Vec<String>> {
        ids.iter()
            .map(|id| {
                self.word_of(*id)
                    .map(str::to_string)
                    .ok_or_else(|| RankError::unknown_vertex(id))
            })
            .collect()
    }

    /// Id of a known word
    pub fn id_of(&self, word: &str) -> Option<TokenId> {
        self.word_to_id.get(word).copied()
    }

    /// Word of a known id
    pub fn word_of(&self, id: TokenId) -> Option<&str> {
        self.id_to_word.get(&id).map(|w| w.as_ref())
    }

    /// Number of distinct words seen
    pub fn len(&self) -> usize {
        self.word_to_id.len()
    }

    /// Check if no word has been seen
    pub fn is_empty(&self) -> bool {
        self.word_to_id.is_empty()
    }
}

/// Encoder for sentence vocabularies; ids start at 1000
#[derive(Debug, Clone)]
pub struct SentenceEncoder {
    inner: TextEncoder,
}

impl Default for SentenceEncoder {
    fn default() -> Self {
        Self {
            inner: TextEncoder::starting_at(FIRST_SENTENCE_TOKEN_ID),
        }
    }
}

impl SentenceEncoder {
    /// Create an encoder handing out ids from 1000
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an encoding of its preprocessed tokens to every sentence.
    /// Sentences without tokens get an empty encoding.
    pub fn encode_sentences(&mut self, sentences: Vec<Sentence>) -> Vec<Sentence> {
        sentences
            .into_iter()
            .map(|sentence| {
                let encoded = sentence
                    .preprocessed()
                    .iter()
                    .map(|word| self.inner.lookup_or_insert(word))
                    .collect();
                sentence.with_encoded(encoded)
            })
            .collect()
    }

    /// Decode ids back to words
    pub fn decode(&self, ids: &[TokenId]) -> Result<Vec<String>> {
        self.inner.decode(ids)
    }

    /// The underlying word encoder
    pub fn encoder(&self) -> &TextEncoder {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_first_appearance_order() {
        let mut encoder = TextEncoder::new();
        let ids = encoder.encode(&["graph", "rank", "graph", "text"]).unwrap();

        assert_eq!(ids, vec![1, 2, 1, 3]);
        assert_eq!(encoder.len(), 3);
    }

    #[test]
    fn test_decode_roundtrip() {
        let mut encoder = TextEncoder::new();
        let ids = encoder.encode(&["alpha", "beta"]).unwrap();
        assert_eq!(encoder.decode(&ids).unwrap(), vec!["alpha", "beta"]);
    }

    #[test]
    fn test_encode_empty_fails() {
        let mut encoder = TextEncoder::new();
        let err = encoder.encode::<&str>(&[]).unwrap_err();
        assert!(err.is_empty_input());
    }

    #[test]
    fn test_decode_unknown_id() {
        let encoder = TextEncoder::new();
        assert!(matches!(
            encoder.decode(&[42]),
            Err(RankError::UnknownVertex { .. })
        ));
    }

    #[test]
    fn test_sentence_ids_start_at_1000() {
        let mut encoder = SentenceEncoder::new();
        let sentences = vec![
            Sentence::new("Cats sleep.", 0).with_preprocessed(vec!["cats".into(), "sleep".into()]),
            Sentence::new("Dogs sleep.", 1).with_preprocessed(vec!["dogs".into(), "sleep".into()]),
            Sentence::new("...", 2),
        ];

        let encoded = encoder.encode_sentences(sentences);
        assert_eq!(encoded[0].encoded(), &[1000, 1001]);
        assert_eq!(encoded[1].encoded(), &[1002, 1001]);
        assert!(encoded[2].encoded().is_empty());
        assert_eq!(encoder.encoder().id_of("dogs"), Some(1002));
    }
}
