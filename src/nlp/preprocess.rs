//! Text and sentence preprocessing
//!
//! Word segmentation follows UAX #29 via `unicode-segmentation`, so CJK and
//! other scripts split sensibly without whitespace-only heuristics.

use crate::errors::{RankError, Result};
use crate::types::Sentence;
use rustc_hash::FxHashSet;
use unicode_segmentation::UnicodeSegmentation;

/// ASCII punctuation plus common typographic marks
pub const DEFAULT_PUNCTUATION: &str =
    "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~–—¡¿⟨⟩«»…⋯‹›“”";

/// Lowercases text, strips punctuation and drops stop words
#[derive(Debug, Clone)]
pub struct TextPreprocessor {
    stop_words: FxHashSet<String>,
    punctuation: FxHashSet<char>,
}

impl Default for TextPreprocessor {
    fn default() -> Self {
        Self::new(Vec::<String>::new(), DEFAULT_PUNCTUATION.chars())
    }
}

impl TextPreprocessor {
    /// Create a preprocessor from stop words and punctuation characters.
    /// Stop words are matched case-insensitively.
    pub fn new<W, I, P>(stop_words: I, punctuation: P) -> Self
    where
        W: AsRef<str>,
        I: IntoIterator<Item = W>,
        P: IntoIterator<Item = char>,
    {
        Self {
            stop_words: stop_words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
            punctuation: punctuation.into_iter().collect(),
        }
    }

    /// Create a preprocessor with [`DEFAULT_PUNCTUATION`]
    pub fn with_stop_words<W, I>(stop_words: I) -> Self
    where
        W: AsRef<str>,
        I: IntoIterator<Item = W>,
    {
        Self::new(stop_words, DEFAULT_PUNCTUATION.chars())
    }

    /// Check if a (lowercase) word is a stop word
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Lowercase, strip punctuation, split into words, drop stop words
    pub fn preprocess_text(&self, text: &str) -> Vec<String> {
        let cleaned: String = text
            .to_lowercase()
            .chars()
            .filter(|c| !self.punctuation.contains(c))
            .collect();

        cleaned
            .unicode_words()
            .filter(|word| !self.is_stop_word(word))
            .map(str::to_string)
            .collect()
    }
}

/// Splits text into positioned, preprocessed sentences
#[derive(Debug, Clone, Default)]
pub struct SentencePreprocessor {
    text: TextPreprocessor,
}

impl SentencePreprocessor {
    /// Create a sentence preprocessor around a word-level preprocessor
    pub fn new(text: TextPreprocessor) -> Self {
        Self { text }
    }

    /// The word-level preprocessor
    pub fn text_preprocessor(&self) -> &TextPreprocessor {
        &self.text
    }

    /// Split `text` into sentences numbered from 0, each carrying its
    /// preprocessed tokens.
    pub fn get_sentences(&self, text: &str) -> Result<Vec<Sentence>> {
        let pieces = split_sentences(text);
        if pieces.is_empty() {
            return Err(RankError::empty_input("text contains no sentences"));
        }

        Ok(pieces
            .into_iter()
            .enumerate()
            .map(|(position, piece)| {
                let tokens = self.text.preprocess_text(&piece);
                Sentence::new(piece, position).with_preprocessed(tokens)
            })
            .collect())
    }
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Split after `.`, `!` or `?` when followed by whitespace and an uppercase
/// letter. Line breaks count as spaces; pieces are trimmed and empty pieces
/// dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let flat = text.replace(['\r', '\n'], " ");
    let chars: Vec<(usize, char)> = flat.char_indices().collect();

    let mut pieces = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (offset, c) = chars[i];
        if is_terminator(c) {
            let mut j = i + 1;
            while j < chars.len() && chars[j].1.is_whitespace() {
                j += 1;
            }
            if j > i + 1 && j < chars.len() && chars[j].1.is_uppercase() {
                pieces.push(flat[start..offset + c.len_utf8()].to_string());
                start = chars[j].0;
                i = j;
                continue;
            }
        }
        i += 1;
    }
    pieces.push(flat[start..].to_string());

    pieces
        .into_iter()
        .map(|piece| piece.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|piece| !piece.is_empty())
        .collect()
}
