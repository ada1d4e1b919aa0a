//! # Sentiment Lexicon
//!
//! Word to sentiment value table. Built once, then shared read-only.

use std::collections::HashMap;

use super::value::Sentiment;
use crate::error::{Error, Result};

/// Word sentiment table
///
/// Keys are stored lowercase; lookups are exact, so callers lowercase text
/// before scoring.
#[derive(Debug, Clone, Default)]
pub struct SentimentLexicon {
    words: HashMap<String, f64>,
}

impl SentimentLexicon {
    /// Create an empty lexicon
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(word, value)` pairs, rejecting values outside [-1, 1]
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::new();
        for (word, value) in pairs {
            lexicon.insert(word.as_ref(), value)?;
        }
        Ok(lexicon)
    }

    /// Add or replace a word
    pub fn insert(&mut self, word: &str, value: f64) -> Result<()> {
        if !(-1.0..=1.0).contains(&value) {
            return Err(Error::InvalidSentimentValue(value));
        }
        self.words.insert(word.to_lowercase(), value);
        Ok(())
    }

    /// Sentiment of a word, `Sentiment::none()` if the word is unknown
    pub fn get(&self, word: &str) -> Sentiment {
        self.words
            .get(word)
            .map(|&v| Sentiment::clamped(v))
            .unwrap_or_default()
    }

    /// Raw value of a word
    pub fn value(&self, word: &str) -> Option<f64> {
        self.words.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words, sorted
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.keys().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}
