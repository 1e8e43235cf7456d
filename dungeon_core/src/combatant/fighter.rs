//! Fighter - Player-controlled combatant built from raw stat inputs

use super::{CombatStats, Combatant, CombatantKind};
use crate::error::CombatError;
use crate::stats::{derive_fighter_stats, FighterInputs};
use crate::types::FighterClass;
use serde::{Deserialize, Serialize};

/// Fighter a duplicate was copied from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateOrigin {
    pub name: String,
    pub fighter_class: String,
}

/// Bookkeeping metadata owned by the roster editor, ignored by battle logic
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    pub is_duplicate: bool,
    pub origin: Option<DuplicateOrigin>,
    pub pool_index: Option<u32>,
}

/// A fighter with derived stats and per-battle state
#[derive(Debug, Clone, PartialEq)]
pub struct Fighter {
    class: FighterClass,
    pub name: String,
    /// Raw inputs are retained so the fighter can be persisted losslessly
    inputs: FighterInputs,
    stats: CombatStats,
    pub provenance: Provenance,
}

impl Fighter {
    /// Create a fighter at full health
    ///
    /// Without a name the class display name is used.
    pub fn new(class: FighterClass, name: Option<&str>, inputs: FighterInputs) -> Self {
        let derived = derive_fighter_stats(&inputs);
        Fighter {
            class,
            name: name.map_or_else(|| class.name().to_string(), str::to_string),
            inputs,
            stats: CombatStats {
                max_health: derived.max_health,
                current_health: derived.max_health,
                damage: derived.damage,
                hit: derived.hit,
                dodge: derived.dodge,
                defense_raw: derived.defense_raw,
                defense_fraction: derived.defense_fraction,
                crit_bonus: derived.crit_bonus,
                hits_landed: 0,
            },
            provenance: Provenance::default(),
        }
    }

    /// Create a fighter from a class name, rejecting unknown classes
    pub fn from_class_name(
        class_name: &str,
        name: Option<&str>,
        inputs: FighterInputs,
    ) -> Result<Self, CombatError> {
        let class = class_name.parse::<FighterClass>()?;
        Ok(Fighter::new(class, name, inputs))
    }

    /// Attach roster bookkeeping
    pub fn with_provenance(mut self, provenance: Provenance) -> Self {
        self.provenance = provenance;
        self
    }

    pub fn fighter_class(&self) -> FighterClass {
        self.class
    }

    pub fn inputs(&self) -> &FighterInputs {
        &self.inputs
    }

    /// A copy with full health and a zeroed hit counter
    pub fn fresh(&self) -> Self {
        let mut fighter = self.clone();
        fighter.stats.current_health = fighter.stats.max_health;
        fighter.stats.hits_landed = 0;
        fighter
    }

    /// Bring a dead fighter back at a fraction of max health (rounded)
    pub fn revive(&mut self, fraction: f64) {
        self.stats.current_health = (self.stats.max_health * fraction).round();
        self.stats.hits_landed = 0;
    }
}

impl Combatant for Fighter {
    fn kind(&self) -> CombatantKind {
        CombatantKind::Fighter(self.class)
    }

    fn stats(&self) -> &CombatStats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut CombatStats {
        &mut self.stats
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fighter_full_health() {
        let fighter = Fighter::new(FighterClass::Paladin, None, FighterInputs::default());
        assert_eq!(fighter.name, "Paladin");
        assert_eq!(fighter.stats().current_health, 500.0);
        assert_eq!(fighter.stats().max_health, 500.0);
        assert!(fighter.is_alive());
        assert_eq!(fighter.kind(), CombatantKind::Fighter(FighterClass::Paladin));
    }

    #[test]
    fn test_from_class_name_rejects_unknown() {
        let result = Fighter::from_class_name("Warlock", None, FighterInputs::default());
        assert_eq!(result, Err(CombatError::InvalidClass("Warlock".to_string())));

        let ok = Fighter::from_class_name("Shadow Dancer", Some("Nyx"), FighterInputs::default());
        assert_eq!(ok.unwrap().fighter_class(), FighterClass::ShadowDancer);
    }

    #[test]
    fn test_take_damage_floors_at_zero() {
        let mut fighter = Fighter::new(FighterClass::Brawler, None, FighterInputs::default());
        fighter.take_damage(200.0);
        assert_eq!(fighter.stats().current_health, 300.0);
        fighter.take_damage(1_000.0);
        assert_eq!(fighter.stats().current_health, 0.0);
        assert!(!fighter.is_alive());
    }

    #[test]
    fn test_revive_rounds_quarter_health() {
        let inputs = FighterInputs {
            equip_health: 2.0,
            ..Default::default()
        };
        let mut fighter = Fighter::new(FighterClass::Mage, None, inputs);
        fighter.take_damage(10_000.0);
        fighter.record_hit();
        fighter.revive(0.25);
        // 502 * 0.25 = 125.5 -> 126
        assert_eq!(fighter.stats().current_health, 126.0);
        assert_eq!(fighter.stats().hits_landed, 0);
    }

    #[test]
    fn test_fresh_resets_battle_state() {
        let mut fighter = Fighter::new(FighterClass::Hunter, None, FighterInputs::default());
        fighter.take_damage(100.0);
        fighter.record_hit();
        let fresh = fighter.fresh();
        assert_eq!(fresh.stats().current_health, 500.0);
        assert_eq!(fresh.stats().hits_landed, 0);
        assert_eq!(fresh.inputs(), fighter.inputs());
    }
}
