//! Attack resolution between two units.

use std::fmt;

use serde::Serialize;

use super::CombatUnit;
use crate::error::MechResult;

/// What happened during one attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttackOutcome {
    /// Damage the attacker dealt.
    pub dealt: u32,
    /// Damage the target dealt back, if it survived to counterattack.
    pub counter: Option<u32>,
    /// Whether the attack killed the target.
    pub target_killed: bool,
}

impl fmt::Display for AttackOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dealt {}", self.dealt)?;
        match self.counter {
            Some(counter) => write!(f, ", countered for {counter}"),
            None if self.target_killed => write!(f, ", target killed"),
            None => Ok(()),
        }
    }
}

impl CombatUnit {
    /// Attack `target`.
    ///
    /// Both units must be alive, the attacker checked first. The target
    /// takes this unit's full damage; if it survives it strikes back for
    /// half its own damage, whatever the attacker's remaining health. A
    /// killing blow draws no counterattack and is not an error.
    pub fn attack(&mut self, target: &mut CombatUnit) -> MechResult<AttackOutcome> {
        self.ensure_alive()?;
        target.ensure_alive()?;

        tracing::debug!(attacker = %self.name, target = %target.name, damage = self.damage, "attack");
        target.wound(self.damage);

        if !target.is_alive() {
            return Ok(AttackOutcome {
                dealt: self.damage,
                counter: None,
                target_killed: true,
            });
        }

        let counter = target.damage / 2;
        tracing::debug!(attacker = %target.name, target = %self.name, damage = counter, "counterattack");
        self.wound(counter);

        Ok(AttackOutcome {
            dealt: self.damage,
            counter: Some(counter),
            target_killed: false,
        })
    }
}
