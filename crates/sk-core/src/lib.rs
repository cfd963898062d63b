//! Core types for Skirmish: loosely-typed input values, numeric coercion,
//! and the two-dimensional [`Point`].
//!
//! Everything here is plain data. The vehicle and combat-unit models live
//! in `sk-mechanics` and build on these types.

/// Error types used throughout the crate.
pub mod error;
/// Float rendering shared by all string forms.
pub mod format;
/// The two-dimensional point type.
pub mod point;
/// Loosely-typed input values and their coercion rules.
pub mod value;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export the float renderer.
pub use format::format_float;
/// Re-export the point type.
pub use point::Point;
/// Re-export the value type.
pub use value::Value;
