//! Region centers and nearest-center assignment

use tracing::debug;

use super::distance::{DistanceMetric, Haversine};
use super::types::{Position, Region};
use crate::error::{Error, Result};

/// How a multi-polygon region is reduced to a single center
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CenterMode {
    /// Centroid of the first polygon only; other parts (islands) are ignored
    #[default]
    PrimaryPolygon,
    /// Area-weighted average of the centroids of every polygon
    AreaWeighted,
}

/// Center of a region: the centroid of its primary polygon
pub fn region_center(region: &Region) -> Position {
    region.primary().centroid().position()
}

/// Center of a region computed with the given mode
pub fn region_center_with(region: &Region, mode: CenterMode) -> Position {
    match mode {
        CenterMode::PrimaryPolygon => region_center(region),
        CenterMode::AreaWeighted => area_weighted_center(region),
    }
}

fn area_weighted_center(region: &Region) -> Position {
    let (lat_sum, lon_sum, total_area) = region
        .polygons()
        .iter()
        .map(|polygon| polygon.centroid())
        .fold((0.0, 0.0, 0.0), |(lat, lon, total), c| {
            (lat + c.latitude * c.area, lon + c.longitude * c.area, total + c.area)
        });

    if total_area == 0.0 {
        return region_center(region);
    }

    Position::new(lat_sum / total_area, lon_sum / total_area)
}

/// Name of the center closest to `point`
///
/// Centers are visited in iteration order and the first one reaching the
/// minimum distance wins, so exact ties depend on that order.
pub fn nearest_region<'a, I, M>(point: Position, centers: I, metric: &M) -> Result<&'a str>
where
    I: IntoIterator<Item = (&'a str, Position)>,
    M: DistanceMetric + ?Sized,
{
    let mut best: Option<(&'a str, f64)> = None;

    for (name, center) in centers {
        let distance = metric.distance(center, point);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((name, distance)),
        }
    }

    best.map(|(name, _)| name).ok_or(Error::NoRegionsAvailable)
}

/// Region centers held in name order, with the metric used to compare them
#[derive(Debug, Clone)]
pub struct RegionCenters<M = Haversine> {
    centers: Vec<(String, Position)>,
    metric: M,
}

impl RegionCenters<Haversine> {
    /// Compute centers for every region, measuring distance in miles
    pub fn from_regions(regions: &[Region], mode: CenterMode) -> Self {
        let centers = regions
            .iter()
            .map(|region| (region.name().to_string(), region_center_with(region, mode)))
            .collect();
        debug!("Computed {} region centers ({:?})", regions.len(), mode);
        Self::from_centers(centers)
    }

    /// Build from precomputed centers
    pub fn from_centers(centers: Vec<(String, Position)>) -> Self {
        Self::with_metric(centers, Haversine::miles())
    }
}

impl<M: DistanceMetric> RegionCenters<M> {
    pub fn with_metric(mut centers: Vec<(String, Position)>, metric: M) -> Self {
        centers.sort_by(|a, b| a.0.cmp(&b.0));
        Self { centers, metric }
    }

    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// Centers in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Position)> + '_ {
        self.centers.iter().map(|(name, center)| (name.as_str(), *center))
    }

    pub fn center(&self, name: &str) -> Option<Position> {
        self.centers
            .binary_search_by(|(n, _)| n.as_str().cmp(name))
            .ok()
            .map(|idx| self.centers[idx].1)
    }

    /// Region whose center is closest to `point`; ties go to the smaller name
    pub fn nearest_region(&self, point: Position) -> Result<&str> {
        nearest_region(point, self.iter(), &self.metric)
    }

    /// The `n` regions closest to the center of `name`, nearest first
    ///
    /// The named region itself comes first at distance 0.
    pub fn nearest_to(&self, name: &str, n: usize) -> Result<Vec<(&str, f64)>> {
        let origin = self
            .center(name)
            .ok_or_else(|| Error::UnknownRegion(name.to_string()))?;

        let mut ranked: Vec<(&str, f64)> = self
            .iter()
            .map(|(region, center)| (region, self.metric.distance(origin, center)))
            .collect();
        // stable sort keeps name order among equal distances
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        ranked.truncate(n);

        Ok(ranked)
    }
}
