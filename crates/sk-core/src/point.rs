use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::format::format_float;
use crate::value::Value;

/// A two-dimensional point with finite coordinates.
///
/// Equality compares both coordinates exactly, with no tolerance. Points
/// produced by arithmetic (for example a destination computed from a
/// heading) may compare unequal to a literal that prints the same.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoint")]
pub struct Point {
    x: f64,
    y: f64,
}

#[derive(Deserialize)]
struct RawPoint {
    x: f64,
    y: f64,
}

impl TryFrom<RawPoint> for Point {
    type Error = CoreError;

    fn try_from(raw: RawPoint) -> CoreResult<Self> {
        Self::new(raw.x, raw.y)
    }
}

impl Point {
    /// Create a point, coercing both coordinates to finite floats.
    pub fn new(x: impl Into<Value>, y: impl Into<Value>) -> CoreResult<Self> {
        Ok(Self {
            x: x.into().to_f64()?,
            y: y.into().to_f64()?,
        })
    }

    /// The point `(0.0, 0.0)`.
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// The x coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// The y coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Replace the x coordinate. Leaves the point untouched on error.
    pub fn set_x(&mut self, x: impl Into<Value>) -> CoreResult<()> {
        self.x = x.into().to_f64()?;
        Ok(())
    }

    /// Replace the y coordinate. Leaves the point untouched on error.
    pub fn set_y(&mut self, y: impl Into<Value>) -> CoreResult<()> {
        self.y = y.into().to_f64()?;
        Ok(())
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::origin()
    }
}

impl TryFrom<(f64, f64)> for Point {
    type Error = CoreError;

    fn try_from((x, y): (f64, f64)) -> CoreResult<Self> {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", format_float(self.x), format_float(self.y))
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point {self}")
    }
}
