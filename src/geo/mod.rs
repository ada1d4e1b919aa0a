//! Geometry module
//!
//! Includes:
//! - Position, polygon and region types
//! - Shoelace area and centroid
//! - Great-circle distance
//! - Region centers and nearest-center assignment

pub mod distance;
pub mod nearest;
pub mod polygon;
mod types;

pub use distance::{DistanceMetric, Haversine};
pub use nearest::{nearest_region, region_center, region_center_with, CenterMode, RegionCenters};
pub use polygon::{area, centroid, Centroid};
pub use types::{Polygon, Position, Region};
