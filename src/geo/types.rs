//! Geographic value types: positions, closed polygons and named regions

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// A (latitude, longitude) pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Closed polygon: at least three vertices, first vertex equal to the last
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Position>,
}

impl Polygon {
    /// Create a polygon, rejecting open rings and rings shorter than three vertices
    pub fn new(vertices: Vec<Position>) -> Result<Self> {
        validate_ring(&vertices)?;
        Ok(Self { vertices })
    }

    /// Vertices in order, including the closing vertex
    pub fn vertices(&self) -> &[Position] {
        &self.vertices
    }

    /// First vertex of the ring
    pub fn first(&self) -> Position {
        self.vertices[0]
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Check the closed-ring precondition shared by [`Polygon`] and the slice metrics
pub(crate) fn validate_ring(vertices: &[Position]) -> Result<()> {
    if vertices.len() < 3 {
        return Err(Error::InvalidPolygon(format!(
            "expected at least 3 vertices, got {}",
            vertices.len()
        )));
    }

    let first = vertices[0];
    let last = vertices[vertices.len() - 1];
    if first != last {
        return Err(Error::InvalidPolygon(format!(
            "ring is not closed: first vertex {} differs from last vertex {}",
            first, last
        )));
    }

    Ok(())
}

/// Named region made of one or more polygons (e.g. a state with islands)
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    name: String,
    polygons: Vec<Polygon>,
}

impl Region {
    pub fn new(name: impl Into<String>, polygons: Vec<Polygon>) -> Result<Self> {
        let name = name.into();
        if polygons.is_empty() {
            return Err(Error::InvalidRegion(format!(
                "region '{}' has no polygons",
                name
            )));
        }
        Ok(Self { name, polygons })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// The polygon used for center computation by default
    pub fn primary(&self) -> &Polygon {
        &self.polygons[0]
    }
}
