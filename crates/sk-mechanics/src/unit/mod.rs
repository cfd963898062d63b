//! Combat units with hit points, damage and an irreversible dead state.
//!
//! A unit with zero hit points is dead and refuses every health-changing
//! operation, healing included.

pub mod attack;
pub mod health;

pub use attack::AttackOutcome;
pub use health::Health;

use std::fmt;

use serde::Serialize;
use sk_core::Value;

use crate::config::UnitConfig;
use crate::error::{MechError, MechResult};

/// A named fighter.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct CombatUnit {
    name: String,
    health: Health,
    damage: u32,
}

impl CombatUnit {
    /// Create a unit at full health.
    ///
    /// `name` must be a string. Hit points and damage are coerced to
    /// integers and stored as absolute values; the starting hit points
    /// also become the limit.
    pub fn new(
        name: impl Into<Value>,
        hit_points: impl Into<Value>,
        damage: impl Into<Value>,
    ) -> MechResult<Self> {
        let name = name.into().into_string()?;
        let hit_points = coerce_points(hit_points.into())?;
        let damage = coerce_points(damage.into())?;
        Ok(Self {
            name,
            health: Health::full(hit_points),
            damage,
        })
    }

    /// Create a unit with 200 hit points and 40 damage.
    pub fn with_defaults(name: impl Into<Value>) -> MechResult<Self> {
        Self::from_config(name, &UnitConfig::default())
    }

    /// Create a unit using configured hit points and damage.
    pub fn from_config(name: impl Into<Value>, config: &UnitConfig) -> MechResult<Self> {
        Self::new(name, config.hit_points, config.damage)
    }

    /// The unit's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current hit points.
    pub fn hit_points(&self) -> u32 {
        self.health.current()
    }

    /// Maximum hit points.
    pub fn hit_points_limit(&self) -> u32 {
        self.health.limit()
    }

    /// Damage dealt per attack.
    pub fn damage(&self) -> u32 {
        self.damage
    }

    /// Returns true while the unit has hit points left.
    pub fn is_alive(&self) -> bool {
        !self.health.is_depleted()
    }

    /// Fail with `UnitIsDead` if the unit has no hit points left.
    pub fn ensure_alive(&self) -> MechResult<()> {
        if self.is_alive() {
            Ok(())
        } else {
            Err(MechError::UnitIsDead(self.name.clone()))
        }
    }

    /// Restore hit points, capped at the limit.
    ///
    /// The amount is coerced and taken as an absolute value before the
    /// liveness check, so garbage input reports `InvalidArgument` even on
    /// a dead unit.
    pub fn add_hit_points(&mut self, amount: impl Into<Value>) -> MechResult<()> {
        let amount = coerce_points(amount.into())?;
        self.ensure_alive()?;
        let hit_points = self.health.heal(amount);
        tracing::debug!(unit = %self.name, amount, hit_points, "healed");
        Ok(())
    }

    /// Lose hit points, floored at zero.
    pub fn take_damage(&mut self, amount: impl Into<Value>) -> MechResult<()> {
        let amount = coerce_points(amount.into())?;
        self.ensure_alive()?;
        self.wound(amount);
        Ok(())
    }

    fn wound(&mut self, amount: u32) {
        let hit_points = self.health.wound(amount);
        tracing::debug!(unit = %self.name, amount, hit_points, "took damage");
        if hit_points == 0 {
            tracing::info!(unit = %self.name, "unit died");
        }
    }
}

/// Coerce a hit-point or damage input to a non-negative count.
fn coerce_points(value: Value) -> MechResult<u32> {
    let magnitude = value.to_i64()?.unsigned_abs();
    u32::try_from(magnitude)
        .map_err(|_| MechError::InvalidArgument(format!("{magnitude} is out of range")))
}

/// Two-line label block, `Name (damage):\t\t{name}({damage})` then
/// `Hit points (limit):\t{hp}({limit})`.
///
/// Hit points and damage are integers and print without a fractional
/// part (`Soldier(20)`, `100(100)`). Older renderings printed them as
/// floats (`Soldier(20.0)`, `100.0(100.0)`); golden files captured from
/// that format need updating.
impl fmt::Display for CombatUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name (damage):\t\t{}({})", self.name, self.damage)?;
        write!(f, "Hit points (limit):\t{}", self.health)
    }
}

impl fmt::Debug for CombatUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unit: {}(dmg {}), hp {}",
            self.name, self.damage, self.health
        )
    }
}
