//! Combatants - Fighters and mobs sharing one combat surface

mod fighter;
mod mob;

pub use crate::stats::FighterInputs;
pub use fighter::{DuplicateOrigin, Fighter, Provenance};
pub use mob::Mob;

use crate::types::FighterClass;
use serde::{Deserialize, Serialize};

/// Discriminant used for class-specific dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CombatantKind {
    Fighter(FighterClass),
    Mob,
}

/// Derived stats plus mutable per-battle state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatStats {
    pub max_health: f64,
    /// Never negative; 0 means dead
    pub current_health: f64,
    pub damage: f64,
    pub hit: f64,
    pub dodge: f64,
    /// Raw defense before the defense curve
    pub defense_raw: f64,
    /// Fraction of damage blocked, in [0, 0.95]
    pub defense_fraction: f64,
    /// Added damage multiplier on a critical strike
    pub crit_bonus: f64,
    /// Landed (or evaded) attacks, informational
    pub hits_landed: u32,
}

/// Anything that takes part in combat
pub trait Combatant {
    /// Class discriminant
    fn kind(&self) -> CombatantKind;

    /// Read access to combat stats
    fn stats(&self) -> &CombatStats;

    /// Write access to per-battle state
    fn stats_mut(&mut self) -> &mut CombatStats;

    /// Name used in battle logs
    fn label(&self) -> String;

    fn class(&self) -> Option<FighterClass> {
        match self.kind() {
            CombatantKind::Fighter(class) => Some(class),
            CombatantKind::Mob => None,
        }
    }

    fn is_fighter(&self) -> bool {
        matches!(self.kind(), CombatantKind::Fighter(_))
    }

    fn has_class(&self, class: FighterClass) -> bool {
        self.class() == Some(class)
    }

    fn is_alive(&self) -> bool {
        self.stats().current_health > 0.0
    }

    /// current / max health
    fn health_fraction(&self) -> f64 {
        let stats = self.stats();
        stats.current_health / stats.max_health
    }

    /// Subtract damage, flooring health at zero
    fn take_damage(&mut self, amount: f64) {
        let stats = self.stats_mut();
        stats.current_health = (stats.current_health - amount).max(0.0);
    }

    fn record_hit(&mut self) {
        self.stats_mut().hits_landed += 1;
    }
}
