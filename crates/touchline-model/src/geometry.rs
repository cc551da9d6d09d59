//! Pitch geometry primitives.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A 2D location expressed in the dataset's coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A 3D location, used where the data carries height (ball position,
/// goal-mouth shot placement).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Drops the height component.
    pub const fn xy(self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Physical pitch size in meters, as reported by the match metadata.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchDimensions {
    pub length: f64,
    pub width: f64,
}

impl PitchDimensions {
    pub const fn new(length: f64, width: f64) -> Self {
        Self { length, width }
    }
}

/// Coordinate system a dataset's locations are expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateSystem {
    /// The vendor's native system: a 100x100 grid, origin at the bottom-left
    /// corner of the pitch, y axis pointing up.
    #[default]
    Provider,
    /// Normalized 1x1 grid, origin at the top-left corner, y axis pointing
    /// down.
    Unit,
    /// Meters, origin at the pitch center, y axis pointing up. Requires the
    /// metadata pitch dimensions.
    Metric,
}

impl CoordinateSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoordinateSystem::Provider => "provider",
            CoordinateSystem::Unit => "unit",
            CoordinateSystem::Metric => "metric",
        }
    }
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CoordinateSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "provider" => Ok(CoordinateSystem::Provider),
            "unit" => Ok(CoordinateSystem::Unit),
            "metric" => Ok(CoordinateSystem::Metric),
            _ => Err(format!("Unknown coordinate system: {s}")),
        }
    }
}
