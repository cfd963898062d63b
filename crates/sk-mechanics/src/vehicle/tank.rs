//! A car's fuel tank.
//!
//! The tank is a float gauge bounded by `[0, capacity]`. Both mutators
//! check before they change anything, so the bound holds after failures.

use serde::Serialize;

use crate::error::{MechError, MechResult};

/// Fuel held by a car, clamped between empty and capacity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuelTank {
    amount: f64,
    capacity: f64,
}

impl FuelTank {
    /// Create an empty tank. The capacity is taken as an absolute value.
    pub fn empty(capacity: f64) -> Self {
        Self {
            amount: 0.0,
            capacity: capacity.abs(),
        }
    }

    /// Current fuel amount.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Tank capacity.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Room left before the tank is full.
    pub fn headroom(&self) -> f64 {
        self.capacity - self.amount
    }

    /// Add fuel. Fails without change if `fuel` is negative, not finite,
    /// or does not fit.
    pub fn fill(&mut self, fuel: f64) -> MechResult<f64> {
        if !fuel.is_finite() || fuel < 0.0 {
            return Err(MechError::InvalidArgument(format!(
                "invalid quantity of fuel: {fuel}"
            )));
        }
        if self.headroom() < fuel {
            return Err(MechError::InvalidOperation(
                "too much fuel, refill was not started".to_string(),
            ));
        }
        // Headroom is itself rounded; clamp so the sum never lands above capacity.
        self.amount = (self.amount + fuel).min(self.capacity);
        Ok(self.amount)
    }

    /// Remove fuel. Fails without change unless `fuel` is a finite amount
    /// the tank holds.
    pub fn draw(&mut self, fuel: f64) -> MechResult<f64> {
        if !fuel.is_finite() || self.amount < fuel {
            return Err(MechError::InvalidOperation(
                "not enough fuel, drive was not started".to_string(),
            ));
        }
        self.amount -= fuel;
        Ok(self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_starts_at_zero() {
        let t = FuelTank::empty(60.0);
        assert_eq!(t.amount(), 0.0);
        assert_eq!(t.capacity(), 60.0);
        assert_eq!(t.headroom(), 60.0);
    }

    #[test]
    fn capacity_is_absolute() {
        assert_eq!(FuelTank::empty(-100.0).capacity(), 100.0);
    }

    #[test]
    fn fill_to_capacity() {
        let mut t = FuelTank::empty(60.0);
        assert_eq!(t.fill(60.0).unwrap(), 60.0);
        assert_eq!(t.headroom(), 0.0);
    }

    #[test]
    fn overfill_is_refused() {
        let mut t = FuelTank::empty(60.0);
        t.fill(60.0).unwrap();
        assert!(matches!(t.fill(40.0), Err(MechError::InvalidOperation(_))));
        assert_eq!(t.amount(), 60.0);
    }

    #[test]
    fn negative_fill_is_invalid_argument() {
        let mut t = FuelTank::empty(60.0);
        assert!(matches!(t.fill(-5.0), Err(MechError::InvalidArgument(_))));
        assert_eq!(t.amount(), 0.0);
    }

    #[test]
    fn draw_more_than_held_is_refused() {
        let mut t = FuelTank::empty(60.0);
        t.fill(10.0).unwrap();
        assert!(matches!(t.draw(10.5), Err(MechError::InvalidOperation(_))));
        assert_eq!(t.amount(), 10.0);
        assert_eq!(t.draw(10.0).unwrap(), 0.0);
    }

    #[test]
    fn non_finite_amounts_are_refused() {
        let mut t = FuelTank::empty(60.0);
        t.fill(10.0).unwrap();
        assert!(matches!(t.fill(f64::NAN), Err(MechError::InvalidArgument(_))));
        assert!(matches!(
            t.fill(f64::INFINITY),
            Err(MechError::InvalidArgument(_))
        ));
        assert!(matches!(t.draw(f64::NAN), Err(MechError::InvalidOperation(_))));
        assert!(matches!(
            t.draw(f64::INFINITY),
            Err(MechError::InvalidOperation(_))
        ));
        assert_eq!(t.amount(), 10.0);
    }
}
