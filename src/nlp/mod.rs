//! Preprocessing and encoding
//!
//! Turns raw text into the integer sequences the graphs are built from.

pub mod encoder;
pub mod preprocess;

pub use encoder::{SentenceEncoder, TextEncoder};
pub use preprocess::{split_sentences, SentencePreprocessor, TextPreprocessor, DEFAULT_PUNCTUATION};
