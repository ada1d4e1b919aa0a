//! Per-bucket sentiment averages

use std::collections::BTreeMap;

use super::grouping::Buckets;
use crate::data::Record;
use crate::sentiment::Sentiment;

/// Average score of each bucket
///
/// Records without sentiment are skipped entirely. A bucket with no scored
/// record is left out of the result rather than reported as 0.
pub fn average_scores<K, F>(buckets: &Buckets<'_, K>, mut score_fn: F) -> BTreeMap<K, f64>
where
    K: Ord + Clone,
    F: FnMut(&Record) -> Sentiment,
{
    let mut averages = BTreeMap::new();

    for (key, records) in buckets {
        let mut sum = 0.0;
        let mut count = 0usize;

        for &record in records {
            if let Some(value) = score_fn(record).value() {
                sum += value;
                count += 1;
            }
        }

        if count > 0 {
            averages.insert(key.clone(), sum / count as f64);
        }
    }

    averages
}
