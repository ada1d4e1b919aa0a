//! Data module
//!
//! Records and the loaders for the static resources they are analysed with.

mod loader;
mod record;

pub use loader::{parse_tweet_line, DataLoader, RecordSource, TermMatcher, TweetFile};
pub use record::Record;
