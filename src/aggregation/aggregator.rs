//! # Sentiment Aggregator
//!
//! Ties the scorer and the region centers together: per-region and
//! per-hour-per-region average sentiment of a set of records.

use std::collections::BTreeMap;
use tracing::debug;

use super::average::average_scores;
use super::grouping::{group_by_hour, group_by_region, most_populated};
use crate::data::Record;
use crate::error::{Error, Result};
use crate::geo::{DistanceMetric, Haversine, Position, RegionCenters};
use crate::sentiment::SentimentScorer;

/// Sentiment aggregator over regions and hours
#[derive(Debug, Clone, Copy)]
pub struct SentimentAggregator<'a, M = Haversine> {
    scorer: SentimentScorer<'a>,
    centers: &'a RegionCenters<M>,
}

impl<'a, M: DistanceMetric> SentimentAggregator<'a, M> {
    pub fn new(scorer: SentimentScorer<'a>, centers: &'a RegionCenters<M>) -> Self {
        Self { scorer, centers }
    }

    pub fn scorer(&self) -> &SentimentScorer<'a> {
        &self.scorer
    }

    pub fn centers(&self) -> &'a RegionCenters<M> {
        self.centers
    }

    /// Average sentiment per nearest region; regions without scored records are absent
    pub fn region_sentiments<'r, I>(&self, records: I) -> Result<BTreeMap<String, f64>>
    where
        I: IntoIterator<Item = &'r Record>,
    {
        let by_region = group_by_region(records, self.centers)?;
        Ok(average_scores(&by_region, |record| self.scorer.score_record(record)))
    }

    /// Region sentiments for each hour of day
    ///
    /// Hours with no scored record in any region are absent. Fails with
    /// `NoRegionsAvailable` when there are no centers, whatever the records.
    pub fn hourly_region_sentiments(
        &self,
        records: &[Record],
    ) -> Result<BTreeMap<u32, BTreeMap<String, f64>>> {
        if self.centers.is_empty() {
            return Err(Error::NoRegionsAvailable);
        }

        let by_hour = group_by_hour(records);
        let mut hourly = BTreeMap::new();

        for (hour, hour_records) in by_hour {
            let sentiments = self.region_sentiments(hour_records)?;
            if !sentiments.is_empty() {
                hourly.insert(hour, sentiments);
            }
        }

        debug!("Computed region sentiments for {} hours", hourly.len());
        Ok(hourly)
    }

    /// Region with the most records and its record count
    ///
    /// On equal counts the region later in name order wins.
    pub fn most_talkative(&self, records: &[Record]) -> Result<Option<(String, usize)>> {
        if self.centers.is_empty() {
            return Err(Error::NoRegionsAvailable);
        }
        let by_region = group_by_region(records, self.centers)?;
        Ok(most_populated(&by_region).map(|(name, count)| (name.clone(), count)))
    }

    /// Location and value of every record that has sentiment
    pub fn scored_points(&self, records: &[Record]) -> Vec<(Position, f64)> {
        records
            .iter()
            .filter_map(|record| {
                self.scorer
                    .score_record(record)
                    .value()
                    .map(|value| (record.position(), value))
            })
            .collect()
    }
}
