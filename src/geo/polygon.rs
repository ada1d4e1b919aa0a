//! Polygon metrics
//!
//! Signed area and centroid of a closed polygon via the shoelace formula.
//! Latitude is treated as the x coordinate and longitude as y.
//!
//! See <http://en.wikipedia.org/wiki/Centroid#Centroid_of_polygon>

use super::types::{validate_ring, Polygon, Position};
use crate::error::Result;

/// Centroid of a polygon together with its unsigned area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid {
    pub latitude: f64,
    pub longitude: f64,
    /// Absolute area, 0 for degenerate polygons
    pub area: f64,
}

impl Centroid {
    /// Centroid location, dropping the area
    pub fn position(&self) -> Position {
        Position::new(self.latitude, self.longitude)
    }

    /// `(latitude, longitude, area)` triple
    pub fn into_tuple(self) -> (f64, f64, f64) {
        (self.latitude, self.longitude, self.area)
    }
}

/// Cross product term `x_i * y_{i+1} - x_{i+1} * y_i` of one edge
#[inline]
fn cross(a: &Position, b: &Position) -> f64 {
    a.latitude * b.longitude - b.latitude * a.longitude
}

fn signed_area_unchecked(vertices: &[Position]) -> f64 {
    let sum: f64 = vertices.windows(2).map(|edge| cross(&edge[0], &edge[1])).sum();
    sum / 2.0
}

fn centroid_unchecked(vertices: &[Position]) -> Centroid {
    let area = signed_area_unchecked(vertices);

    // Zero area (collinear or repeated points): use the first vertex
    if area == 0.0 {
        let first = vertices[0];
        return Centroid {
            latitude: first.latitude,
            longitude: first.longitude,
            area: 0.0,
        };
    }

    let (sum_x, sum_y) = vertices
        .windows(2)
        .fold((0.0, 0.0), |(sum_x, sum_y), edge| {
            let (a, b) = (&edge[0], &edge[1]);
            let c = cross(a, b);
            (
                sum_x + (a.latitude + b.latitude) * c,
                sum_y + (a.longitude + b.longitude) * c,
            )
        });

    Centroid {
        latitude: sum_x / (6.0 * area),
        longitude: sum_y / (6.0 * area),
        area: area.abs(),
    }
}

/// Signed area of a closed ring; positive for counter-clockwise winding
///
/// Fails with `InvalidPolygon` if the ring is open or has fewer than 3 vertices.
pub fn area(vertices: &[Position]) -> Result<f64> {
    validate_ring(vertices)?;
    Ok(signed_area_unchecked(vertices))
}

/// Centroid and absolute area of a closed ring
///
/// A polygon with zero signed area reports its first vertex as the centroid
/// and an area of 0.
pub fn centroid(vertices: &[Position]) -> Result<Centroid> {
    validate_ring(vertices)?;
    Ok(centroid_unchecked(vertices))
}

impl Polygon {
    /// Signed shoelace area
    pub fn signed_area(&self) -> f64 {
        signed_area_unchecked(self.vertices())
    }

    /// Centroid and absolute area
    pub fn centroid(&self) -> Centroid {
        centroid_unchecked(self.vertices())
    }
}
