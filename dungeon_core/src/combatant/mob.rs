//! Mob - Level-scaled enemy

use super::{CombatStats, Combatant, CombatantKind};
use crate::stats::{defense_curve, MobStatLine};

/// A mob whose stats derive entirely from its level
#[derive(Debug, Clone, PartialEq)]
pub struct Mob {
    level: u32,
    stats: CombatStats,
}

impl Mob {
    pub fn new(level: u32) -> Self {
        let health = MobStatLine::HEALTH.at(level);
        let defense_raw = MobStatLine::DEFENSE.at(level);
        Mob {
            level,
            stats: CombatStats {
                max_health: health,
                current_health: health,
                damage: MobStatLine::DAMAGE.at(level),
                hit: MobStatLine::HIT.at(level),
                dodge: MobStatLine::DODGE.at(level),
                defense_raw,
                defense_fraction: defense_curve(defense_raw),
                crit_bonus: level as f64 / 100_000.0,
                hits_landed: 0,
            },
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }
}

impl Combatant for Mob {
    fn kind(&self) -> CombatantKind {
        CombatantKind::Mob
    }

    fn stats(&self) -> &CombatStats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut CombatStats {
        &mut self.stats
    }

    fn label(&self) -> String {
        format!("level {} Mob", self.level)
    }
}
