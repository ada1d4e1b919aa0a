//! Text record with a location and an optional posting time

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geo::Position;

/// A short text (a tweet) posted at some position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    text: String,
    timestamp: Option<NaiveDateTime>,
    position: Position,
}

impl Record {
    pub fn new(text: impl Into<String>, timestamp: Option<NaiveDateTime>, position: Position) -> Self {
        Self {
            text: text.into(),
            timestamp,
            position,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.timestamp
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Hour of day in [0, 23], if the record has a timestamp
    pub fn hour(&self) -> Option<u32> {
        self.timestamp.map(|t| t.hour())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" @ {}", self.text, self.position)
    }
}
