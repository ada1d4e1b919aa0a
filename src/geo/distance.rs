//! Great-circle distance between positions

use super::types::Position;
use crate::defaults::EARTH_RADIUS_MILES;

/// Distance between two positions
pub trait DistanceMetric {
    fn distance(&self, a: Position, b: Position) -> f64;
}

/// Haversine great-circle distance on a sphere
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Haversine {
    /// Sphere radius; the result is in the same unit
    radius: f64,
}

impl Haversine {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Distances in miles on an Earth-sized sphere
    pub fn miles() -> Self {
        Self::new(EARTH_RADIUS_MILES)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Default for Haversine {
    fn default() -> Self {
        Self::miles()
    }
}

impl DistanceMetric for Haversine {
    fn distance(&self, a: Position, b: Position) -> f64 {
        let lat1 = a.latitude.to_radians();
        let lat2 = b.latitude.to_radians();
        let d_lat = lat2 - lat1;
        let d_lon = (b.longitude - a.longitude).to_radians();

        let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        // rounding can push h past 1 near antipodes
        2.0 * h.sqrt().min(1.0).asin() * self.radius
    }
}

impl<F> DistanceMetric for F
where
    F: Fn(Position, Position) -> f64,
{
    fn distance(&self, a: Position, b: Position) -> f64 {
        self(a, b)
    }
}
