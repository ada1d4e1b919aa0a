//! # Tweet Trends
//!
//! Polygon centroids and a small tweet sentiment pipeline: tweets are scored
//! against a word sentiment table, assigned to the nearest US state center
//! and to their hour of day, and averaged per bucket.
//!
//! ## Modules
//!
//! - `geo` - Positions, polygons, shoelace area/centroid, nearest-center assignment
//! - `sentiment` - Tokenizer, sentiment lexicon and text scoring
//! - `data` - Records and loaders for sentiment, region and tweet files
//! - `aggregation` - Grouping by region/hour and per-bucket averages
//! - `utils` - Configuration and logging
//!
//! ## Example Usage
//!
//! ```
//! use tweet_trends::{Position, Record, RegionCenters, SentimentAggregator, SentimentLexicon, SentimentScorer};
//!
//! let lexicon = SentimentLexicon::from_pairs([("love", 0.5), ("hate", -0.5)]).unwrap();
//! let centers = RegionCenters::from_centers(vec![
//!     ("CA".to_string(), Position::new(37.25, -119.61)),
//!     ("NJ".to_string(), Position::new(40.0, -74.5)),
//! ]);
//!
//! let tweets = vec![
//!     Record::new("i love my job", None, Position::new(38.0, -122.0)),
//!     Record::new("i hate my job", None, Position::new(41.0, -74.0)),
//! ];
//!
//! let aggregator = SentimentAggregator::new(SentimentScorer::new(&lexicon), &centers);
//! let by_state = aggregator.region_sentiments(&tweets).unwrap();
//!
//! assert_eq!(by_state["CA"], 0.5);
//! assert_eq!(by_state["NJ"], -0.5);
//! ```

pub mod aggregation;
pub mod data;
pub mod error;
pub mod geo;
pub mod sentiment;
pub mod utils;

// Re-exports for convenience
pub use aggregation::{average_scores, group_by, group_by_hour, group_by_region, SentimentAggregator};
pub use data::{DataLoader, Record, RecordSource, TweetFile};
pub use error::{Error, Result};
pub use geo::{CenterMode, Centroid, DistanceMetric, Haversine, Polygon, Position, Region, RegionCenters};
pub use sentiment::{Sentiment, SentimentLexicon, SentimentScorer, Tokenizer};
pub use utils::{AppConfig, ConfigError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration values
pub mod defaults {
    /// Earth radius used for great-circle distances, in miles
    pub const EARTH_RADIUS_MILES: f64 = 3963.2;

    /// Region the centered listing starts from
    pub const CENTER_REGION: &str = "TX";

    /// Number of regions in the centered listing
    pub const NEAREST_COUNT: usize = 10;

    /// Search term when none is given
    pub const SEARCH_TERM: &str = "my job";
}
