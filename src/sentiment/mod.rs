//! # Sentiment Module
//!
//! Tokenization, the word sentiment lexicon and text scoring.

mod lexicon;
mod scorer;
pub mod tokenizer;
mod value;

pub use lexicon::SentimentLexicon;
pub use scorer::SentimentScorer;
pub use tokenizer::{tokenize, LetterClass, Tokenizer};
pub use value::Sentiment;
