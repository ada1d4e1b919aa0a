//! Grouping records into buckets
//!
//! Buckets are ordered by key; records keep their input order inside a
//! bucket. Only keys that received at least one record are present.

use std::collections::BTreeMap;
use tracing::debug;

use crate::data::Record;
use crate::error::{Error, Result};
use crate::geo::{DistanceMetric, RegionCenters};

/// Records grouped by key, borrowed from the input
pub type Buckets<'r, K> = BTreeMap<K, Vec<&'r Record>>;

/// Number of hour buckets in a day
pub const HOURS_PER_DAY: u32 = 24;

/// Group records by `key_fn`; records mapped to `None` are left out
pub fn group_by<'r, I, K, F>(records: I, mut key_fn: F) -> Buckets<'r, K>
where
    I: IntoIterator<Item = &'r Record>,
    K: Ord,
    F: FnMut(&Record) -> Option<K>,
{
    let mut buckets: Buckets<'r, K> = BTreeMap::new();
    for record in records {
        if let Some(key) = key_fn(record) {
            buckets.entry(key).or_default().push(record);
        }
    }
    buckets
}

/// Like [`group_by`], stopping at the first key error
pub fn try_group_by<'r, I, K, F>(records: I, mut key_fn: F) -> Result<Buckets<'r, K>>
where
    I: IntoIterator<Item = &'r Record>,
    K: Ord,
    F: FnMut(&Record) -> Result<Option<K>>,
{
    let mut buckets: Buckets<'r, K> = BTreeMap::new();
    for record in records {
        if let Some(key) = key_fn(record)? {
            buckets.entry(key).or_default().push(record);
        }
    }
    Ok(buckets)
}

/// Group records by the region whose center is nearest to them
///
/// Fails with `NoRegionsAvailable` when `centers` is empty, even for no records.
pub fn group_by_region<'r, I, M>(records: I, centers: &RegionCenters<M>) -> Result<Buckets<'r, String>>
where
    I: IntoIterator<Item = &'r Record>,
    M: DistanceMetric,
{
    if centers.is_empty() {
        return Err(Error::NoRegionsAvailable);
    }

    let buckets = try_group_by(records, |record| {
        centers
            .nearest_region(record.position())
            .map(|name| Some(name.to_string()))
    })?;

    debug!("Grouped records into {} regions", buckets.len());
    Ok(buckets)
}

/// Group records by hour of day; records without a timestamp are left out
///
/// Hours that received no records are absent.
pub fn group_by_hour<'r, I>(records: I) -> Buckets<'r, u32>
where
    I: IntoIterator<Item = &'r Record>,
{
    group_by(records, Record::hour)
}

/// Bucket holding the most records; on equal counts the later key wins
pub fn most_populated<K: Ord, V>(buckets: &BTreeMap<K, Vec<V>>) -> Option<(&K, usize)> {
    buckets
        .iter()
        .map(|(key, values)| (key, values.len()))
        .max_by_key(|&(_, count)| count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Position;
    use chrono::NaiveDate;

    fn at_hour(text: &str, hour: u32) -> Record {
        let time = NaiveDate::from_ymd_opt(2011, 8, 28)
            .unwrap()
            .and_hms_opt(hour, 30, 0)
            .unwrap();
        Record::new(text, Some(time), Position::new(0.0, 0.0))
    }

    fn at(text: &str, lat: f64, lon: f64) -> Record {
        Record::new(text, None, Position::new(lat, lon))
    }

    fn centers() -> RegionCenters {
        RegionCenters::from_centers(vec![
            ("CA".to_string(), Position::new(37.25, -119.61)),
            ("NJ".to_string(), Position::new(40.0, -74.5)),
        ])
    }

    #[test]
    fn test_group_by_keeps_order_within_bucket() {
        let records = vec![at("a", 0.0, 0.0), at("bb", 0.0, 0.0), at("c", 0.0, 0.0), at("dd", 0.0, 0.0)];
        let buckets = group_by(&records, |r| Some(r.text().len()));

        assert_eq!(buckets.len(), 2);
        let texts: Vec<&str> = buckets[&2].iter().map(|r| r.text()).collect();
        assert_eq!(texts, vec!["bb", "dd"]);
    }

    #[test]
    fn test_group_by_region() {
        let records = vec![
            at("welcome to san francisco", 38.0, -122.0),
            at("welcome to new york", 41.0, -74.0),
            at("hello la", 34.0, -118.0),
        ];
        let buckets = group_by_region(&records, &centers()).unwrap();

        assert_eq!(buckets["CA"].len(), 2);
        assert_eq!(buckets["CA"][0].to_string(), "\"welcome to san francisco\" @ (38, -122)");
        assert_eq!(buckets["NJ"].len(), 1);
    }

    #[test]
    fn test_group_by_region_without_centers() {
        let empty = RegionCenters::from_centers(Vec::new());
        let records = vec![at("hi", 0.0, 0.0)];

        assert!(matches!(group_by_region(&records, &empty), Err(Error::NoRegionsAvailable)));
        let none: Vec<Record> = Vec::new();
        assert!(matches!(group_by_region(&none, &empty), Err(Error::NoRegionsAvailable)));
    }

    #[test]
    fn test_group_by_hour() {
        let records = vec![
            at_hour("late", 23),
            at_hour("midnight", 0),
            at("no time", 0.0, 0.0),
            at_hour("later", 23),
        ];
        let buckets = group_by_hour(&records);

        assert_eq!(buckets.keys().copied().collect::<Vec<_>>(), vec![0, 23]);
        assert_eq!(buckets[&23].len(), 2);
        assert!(buckets.keys().all(|&h| h < HOURS_PER_DAY));
    }

    #[test]
    fn test_most_populated() {
        let records = vec![at("a", 0.0, 0.0), at("b", 0.0, 0.0), at("c", 0.0, 0.0)];
        let mut buckets: Buckets<&str> = BTreeMap::new();
        buckets.insert("NJ", vec![&records[0], &records[1]]);
        buckets.insert("TX", vec![&records[2]]);

        assert_eq!(most_populated(&buckets), Some((&"NJ", 2)));

        buckets.insert("WA", vec![&records[0], &records[2]]);
        assert_eq!(most_populated(&buckets), Some((&"WA", 2)));

        let empty: Buckets<&str> = BTreeMap::new();
        assert_eq!(most_populated(&empty), None);
    }
}
