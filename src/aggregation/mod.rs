//! Aggregation module
//!
//! Grouping records into region and hour buckets and averaging their
//! sentiment.

mod aggregator;
mod average;
mod grouping;

pub use aggregator::SentimentAggregator;
pub use average::average_scores;
pub use grouping::{
    group_by, group_by_hour, group_by_region, most_populated, try_group_by, Buckets, HOURS_PER_DAY,
};
