//! Constructor defaults for cars and combat units.
//!
//! Defaults can be overridden in code with the `with_*` builders or loaded
//! from JSON. Fields missing from the JSON keep their default values.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sk_core::Point;

use crate::error::{MechError, MechResult};

/// Defaults used when building a [`Car`](crate::Car) without explicit arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarConfig {
    /// Fuel tank capacity in litres.
    pub capacity: f64,
    /// Fuel consumption in litres per unit distance.
    pub consumption: f64,
    /// Starting location.
    pub location: Point,
    /// Model name.
    pub model: String,
}

impl Default for CarConfig {
    fn default() -> Self {
        Self {
            capacity: 60.0,
            consumption: 0.6,
            location: Point::origin(),
            model: "Mercedes".to_string(),
        }
    }
}

impl CarConfig {
    /// Set the fuel tank capacity.
    pub fn with_capacity(mut self, capacity: f64) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the fuel consumption rate.
    pub fn with_consumption(mut self, consumption: f64) -> Self {
        self.consumption = consumption;
        self
    }

    /// Set the starting location.
    pub fn with_location(mut self, location: Point) -> Self {
        self.location = location;
        self
    }

    /// Set the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// Defaults used when building a [`CombatUnit`](crate::CombatUnit) from a name alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitConfig {
    /// Starting (and maximum) hit points.
    pub hit_points: i64,
    /// Damage dealt per attack.
    pub damage: i64,
}

impl Default for UnitConfig {
    fn default() -> Self {
        Self {
            hit_points: 200,
            damage: 40,
        }
    }
}

impl UnitConfig {
    /// Set the starting hit points.
    pub fn with_hit_points(mut self, hit_points: i64) -> Self {
        self.hit_points = hit_points;
        self
    }

    /// Set the damage per attack.
    pub fn with_damage(mut self, damage: i64) -> Self {
        self.damage = damage;
        self
    }
}

/// The full set of mechanics defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MechConfig {
    /// Car defaults.
    pub car: CarConfig,
    /// Combat unit defaults.
    pub unit: UnitConfig,
}

impl MechConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json(json: &str) -> MechResult<Self> {
        serde_json::from_str(json).map_err(|e| MechError::InvalidConfig(e.to_string()))
    }

    /// Read and parse a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> MechResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded mechanics config");
        Self::from_json(&text)
    }
}
