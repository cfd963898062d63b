//! Hit-point pools.
//!
//! A pool is clamped between zero and the limit fixed at creation. An
//! empty pool means the owner is dead.

use std::fmt;

use serde::Serialize;

/// Current and maximum hit points of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Health {
    current: u32,
    limit: u32,
}

impl Health {
    /// Create a full pool.
    pub fn full(limit: u32) -> Self {
        Self {
            current: limit,
            limit,
        }
    }

    /// Current hit points.
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Maximum hit points.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Restore hit points, capped at the limit. Returns the new value.
    pub fn heal(&mut self, amount: u32) -> u32 {
        self.current = self.current.saturating_add(amount).min(self.limit);
        self.current
    }

    /// Remove hit points, floored at zero. Returns the new value.
    pub fn wound(&mut self, amount: u32) -> u32 {
        self.current = self.current.saturating_sub(amount);
        self.current
    }

    /// Returns true if no hit points remain.
    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }
}

impl fmt::Display for Health {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.current, self.limit)
    }
}
