//! Text sentiment scoring
//!
//! The score of a text is the mean value of its words found in the lexicon.
//! Words missing from the lexicon count toward neither the sum nor the
//! number of words.

use super::lexicon::SentimentLexicon;
use super::tokenizer::Tokenizer;
use super::value::Sentiment;
use crate::data::Record;

/// Scores text against a borrowed lexicon
#[derive(Debug, Clone, Copy)]
pub struct SentimentScorer<'a> {
    lexicon: &'a SentimentLexicon,
    tokenizer: Tokenizer,
}

impl<'a> SentimentScorer<'a> {
    pub fn new(lexicon: &'a SentimentLexicon) -> Self {
        Self {
            lexicon,
            tokenizer: Tokenizer::new(),
        }
    }

    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn lexicon(&self) -> &'a SentimentLexicon {
        self.lexicon
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Words of `text` that carry sentiment, with their values, in text order
    pub fn word_sentiments<'t>(&self, text: &'t str) -> Vec<(&'t str, f64)> {
        self.tokenizer
            .tokenize(text)
            .into_iter()
            .filter_map(|word| self.lexicon.value(word).map(|v| (word, v)))
            .collect()
    }

    /// Average sentiment of `text`, or no sentiment if no word matched
    pub fn score(&self, text: &str) -> Sentiment {
        let (sum, count) = self
            .word_sentiments(text)
            .into_iter()
            .fold((0.0, 0usize), |(sum, count), (_, v)| (sum + v, count + 1));

        if count == 0 {
            return Sentiment::none();
        }

        Sentiment::clamped(sum / count as f64)
    }

    pub fn score_record(&self, record: &Record) -> Sentiment {
        self.score(record.text())
    }
}
