//! Fuel-consuming cars that drive between points.
//!
//! A car owns its location by value. Moves are all-or-nothing: a drive
//! either drains the fuel and relocates the car, or fails and leaves both
//! untouched.

pub mod tank;

pub use tank::FuelTank;

use std::fmt;

use serde::Serialize;
use sk_core::{Point, Value, format_float};

use crate::config::CarConfig;
use crate::error::MechResult;

/// A car with a fuel tank, a consumption rate and a location.
#[derive(Clone, PartialEq, Serialize)]
pub struct Car {
    model: String,
    consumption: f64,
    location: Point,
    tank: FuelTank,
}

impl Car {
    /// Build a car with an empty tank.
    ///
    /// Capacity and consumption are coerced to floats and stored as
    /// absolute values. `location` must be a point and `model` a string.
    pub fn new(
        capacity: impl Into<Value>,
        consumption: impl Into<Value>,
        location: impl Into<Value>,
        model: impl Into<Value>,
    ) -> MechResult<Self> {
        let capacity = capacity.into().to_f64()?;
        let consumption = consumption.into().to_f64()?;
        let location = location.into().into_point()?;
        let model = model.into().into_string()?;
        Ok(Self::assemble(capacity, consumption, location, model))
    }

    /// Build a car from configured defaults.
    pub fn from_config(config: &CarConfig) -> MechResult<Self> {
        Self::new(
            config.capacity,
            config.consumption,
            config.location,
            config.model.as_str(),
        )
    }

    fn assemble(capacity: f64, consumption: f64, location: Point, model: String) -> Self {
        Self {
            model,
            consumption: consumption.abs(),
            location,
            tank: FuelTank::empty(capacity),
        }
    }

    /// The model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Litres of fuel burned per unit distance.
    pub fn fuel_consumption(&self) -> f64 {
        self.consumption
    }

    /// Fuel tank capacity.
    pub fn fuel_capacity(&self) -> f64 {
        self.tank.capacity()
    }

    /// Fuel currently in the tank.
    pub fn fuel_amount(&self) -> f64 {
        self.tank.amount()
    }

    /// Current location.
    pub fn location(&self) -> Point {
        self.location
    }

    /// Add fuel to the tank.
    ///
    /// Fails with `InvalidArgument` if `fuel` is not a number or is
    /// negative, and with `InvalidOperation` if it would overflow the tank.
    pub fn refill(&mut self, fuel: impl Into<Value>) -> MechResult<()> {
        let fuel = fuel.into().to_f64()?;
        match self.tank.fill(fuel) {
            Ok(amount) => {
                tracing::debug!(model = %self.model, fuel, amount, "refilled");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(model = %self.model, fuel, headroom = self.tank.headroom(), "refill refused");
                Err(err)
            }
        }
    }

    /// Fuel a straight-line drive to `destination` would burn.
    ///
    /// Zero for a car that burns nothing, even when the distance between
    /// extreme coordinates overflows to infinity.
    pub fn fuel_needed_for(&self, destination: &Point) -> f64 {
        if self.consumption == 0.0 {
            return 0.0;
        }
        self.consumption * self.location.distance_to(destination)
    }

    /// Distance the car can cover on its current fuel.
    pub fn range(&self) -> f64 {
        if self.consumption == 0.0 {
            return f64::INFINITY;
        }
        self.tank.amount() / self.consumption
    }

    /// Drive in a straight line to `destination`.
    ///
    /// Fails with `InvalidOperation` if the tank holds less fuel than the
    /// trip needs; the car then stays where it is with its fuel intact.
    pub fn drive_to(&mut self, destination: Point) -> MechResult<()> {
        let needed = self.fuel_needed_for(&destination);
        match self.tank.draw(needed) {
            Ok(remaining) => {
                tracing::debug!(
                    model = %self.model,
                    from = %self.location,
                    to = %destination,
                    fuel_used = needed,
                    remaining,
                    "drove"
                );
                self.location = destination;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(
                    model = %self.model,
                    to = %destination,
                    needed,
                    available = self.tank.amount(),
                    "drive refused"
                );
                Err(err)
            }
        }
    }

    /// Drive to the point `(x, y)`, coercing the raw coordinates first.
    pub fn drive_to_coordinates(
        &mut self,
        x: impl Into<Value>,
        y: impl Into<Value>,
    ) -> MechResult<()> {
        let destination = Point::new(x, y)?;
        self.drive_to(destination)
    }
}

impl Default for Car {
    fn default() -> Self {
        let config = CarConfig::default();
        Self::assemble(
            config.capacity,
            config.consumption,
            config.location,
            config.model,
        )
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Model:\t\t\t{}", self.model)?;
        writeln!(f, "Consumption:\t{}", format_float(self.consumption))?;
        writeln!(f, "Location:\t\t{}", self.location)?;
        writeln!(f, "Fuel capacity:\t{}", format_float(self.tank.capacity()))?;
        writeln!(f, "Fuel amount:\t{:.4}", self.tank.amount())
    }
}

impl fmt::Debug for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Car: {} (consumption {}), fuel {} ({}), located at {}",
            self.model,
            format_float(self.consumption),
            format_float(self.tank.amount()),
            format_float(self.tank.capacity()),
            self.location
        )
    }
}
