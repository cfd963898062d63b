use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::format::format_float;
use crate::point::Point;

/// A loosely-typed input value awaiting coercion.
///
/// Constructors across the workspace accept `impl Into<Value>` so callers
/// can pass numbers, numeric strings or points, and every conversion
/// failure surfaces as a [`CoreError`] instead of a panic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A point value.
    Point(Point),
    /// A text value.
    String(String),
    /// A 64-bit signed integer value.
    Integer(i64),
    /// A 64-bit floating-point value.
    Float(f64),
    /// A boolean value.
    Boolean(bool),
}

impl Value {
    /// The kind name used in type-mismatch diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Point(_) => "point",
            Self::String(_) => "string",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Boolean(_) => "boolean",
        }
    }

    /// Coerce to a finite float.
    ///
    /// Strings are trimmed and parsed; booleans count as `1.0`/`0.0`.
    /// Non-finite results are rejected.
    pub fn to_f64(&self) -> CoreResult<f64> {
        let number = match self {
            Self::Integer(n) => *n as f64,
            Self::Float(n) => *n,
            Self::Boolean(b) => f64::from(u8::from(*b)),
            Self::String(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| CoreError::invalid(format!("{s:?}"), "float"))?,
            Self::Point(_) => return Err(self.mismatch("number")),
        };

        if number.is_finite() {
            Ok(number)
        } else {
            Err(CoreError::invalid(self, "float"))
        }
    }

    /// Coerce to an integer.
    ///
    /// Floats are truncated toward zero. Strings must hold a base-10
    /// integer literal, so `"3.5"` is rejected while `3.5` becomes `3`.
    pub fn to_i64(&self) -> CoreResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            Self::Boolean(b) => Ok(i64::from(*b)),
            Self::Float(n) => {
                let truncated = n.trunc();
                // i64::MAX is not representable as f64; the half-open range is exact.
                if truncated.is_finite() && (-(2f64.powi(63))..2f64.powi(63)).contains(&truncated)
                {
                    Ok(truncated as i64)
                } else {
                    Err(CoreError::invalid(self, "integer"))
                }
            }
            Self::String(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| CoreError::invalid(format!("{s:?}"), "integer")),
            Self::Point(_) => Err(self.mismatch("number")),
        }
    }

    /// Unwrap a string value, failing with a type mismatch otherwise.
    pub fn into_string(self) -> CoreResult<String> {
        match self {
            Self::String(s) => Ok(s),
            other => Err(other.mismatch("string")),
        }
    }

    /// Unwrap a point value, failing with a type mismatch otherwise.
    pub fn into_point(self) -> CoreResult<Point> {
        match self {
            Self::Point(p) => Ok(p),
            other => Err(other.mismatch("point")),
        }
    }

    fn mismatch(&self, expected: &'static str) -> CoreError {
        CoreError::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Point(p) => write!(f, "{p}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => f.write_str(&format_float(*n)),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Self::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<Point> for Value {
    fn from(p: Point) -> Self {
        Self::Point(p)
    }
}
