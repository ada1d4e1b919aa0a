//! Sentiment value: a polarity in [-1, 1] or no value at all

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Degree of positive or negative feeling, possibly unknown
///
/// "No value" is not the same as 0: zero means neutral, `None` means nothing
/// in the text carried sentiment.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sentiment(Option<f64>);

impl Sentiment {
    /// Create a sentiment, rejecting values outside [-1, 1] (and NaN)
    pub fn new(value: Option<f64>) -> Result<Self> {
        match value {
            Some(v) if !(-1.0..=1.0).contains(&v) => Err(Error::InvalidSentimentValue(v)),
            _ => Ok(Self(value)),
        }
    }

    pub fn from_value(value: f64) -> Result<Self> {
        Self::new(Some(value))
    }

    /// Sentiment with no value
    pub const fn none() -> Self {
        Self(None)
    }

    /// Wrap a value already known to lie in [-1, 1] up to rounding
    pub(crate) fn clamped(value: f64) -> Self {
        Self(Some(value.clamp(-1.0, 1.0)))
    }

    pub fn has_value(&self) -> bool {
        self.0.is_some()
    }

    pub fn value(&self) -> Option<f64> {
        self.0
    }
}

impl From<Sentiment> for Option<f64> {
    fn from(sentiment: Sentiment) -> Self {
        sentiment.0
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{:+.3}", v),
            None => write!(f, "none"),
        }
    }
}
