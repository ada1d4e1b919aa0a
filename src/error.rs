//! Error types for the tweet trends library

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Polygon is not closed or has fewer than three vertices
    #[error("Invalid polygon: {0}")]
    InvalidPolygon(String),

    /// Region has no polygons
    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    /// Nearest-center lookup over an empty set of centers
    #[error("No regions available for nearest-center assignment")]
    NoRegionsAvailable,

    /// Named region is not among the known centers
    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    /// Sentiment value outside [-1, 1]
    #[error("Invalid sentiment value: {0} (expected a value in [-1, 1])")]
    InvalidSentimentValue(f64),

    /// Data parsing error
    #[error("Failed to parse data: {0}")]
    Parse(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Whether the error comes from malformed input data rather than I/O
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidPolygon(_)
                | Error::InvalidRegion(_)
                | Error::InvalidSentimentValue(_)
                | Error::Parse(_)
        )
    }
}
