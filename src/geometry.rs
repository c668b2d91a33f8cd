//! Minimal 3-D point type exchanged with the host session.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3d {
    /// The origin, returned by point prompts that got no answer.
    pub const ORIGIN: Point3d = Point3d { x: 0.0, y: 0.0, z: 0.0 };

    /// Returned by corner prompts that got no answer. Finite so it compares
    /// equal to itself, and never equal to [`Point3d::ORIGIN`].
    pub const NULL: Point3d = Point3d { x: f64::MIN, y: f64::MIN, z: f64::MIN };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }

    pub fn offset(&self, dx: f64, dy: f64, dz: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    pub fn distance_to(&self, other: &Point3d) -> f64 {
        let (dx, dy, dz) = (other.x - self.x, other.y - self.y, other.z - self.z);
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl Default for Point3d {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Display for Point3d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
