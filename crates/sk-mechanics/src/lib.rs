//! Vehicle and combat-unit mechanics for Skirmish.
//!
//! Provides fuel-consuming [`Car`]s that drive between points and
//! [`CombatUnit`]s that trade blows with an automatic counterattack.
//! Every operation validates its input and the current state before it
//! mutates anything.

pub mod config;
pub mod error;
pub mod unit;
pub mod vehicle;

pub use config::{CarConfig, MechConfig, UnitConfig};
pub use error::{MechError, MechResult};
pub use unit::{AttackOutcome, CombatUnit, Health};
pub use vehicle::{Car, FuelTank};
