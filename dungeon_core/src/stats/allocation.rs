//! Allocation scaling - Raw allocation points + gear bonuses into combat stats

use super::defense::defense_curve;
use serde::{Deserialize, Serialize};

/// The twelve raw stat inputs of a fighter
///
/// `*_alloc` are player-assigned allocation points, `equip_*` are flat
/// bonuses from gear. All values are expected to be non-negative; use
/// [`FighterInputs::clamped`] at any untrusted boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FighterInputs {
    pub health_alloc: f64,
    pub damage_alloc: f64,
    pub hit_alloc: f64,
    pub defense_alloc: f64,
    pub crit_alloc: f64,
    pub dodge_alloc: f64,
    pub equip_health: f64,
    pub equip_damage: f64,
    pub equip_hit: f64,
    pub equip_defense: f64,
    /// Crit bonus from gear, in percentage points
    pub equip_crit: f64,
    pub equip_dodge: f64,
}

impl FighterInputs {
    /// Copy with every negative (or NaN) input replaced by zero
    pub fn clamped(&self) -> Self {
        let clamp = |v: f64| if v > 0.0 { v } else { 0.0 };
        FighterInputs {
            health_alloc: clamp(self.health_alloc),
            damage_alloc: clamp(self.damage_alloc),
            hit_alloc: clamp(self.hit_alloc),
            defense_alloc: clamp(self.defense_alloc),
            crit_alloc: clamp(self.crit_alloc),
            dodge_alloc: clamp(self.dodge_alloc),
            equip_health: clamp(self.equip_health),
            equip_damage: clamp(self.equip_damage),
            equip_hit: clamp(self.equip_hit),
            equip_defense: clamp(self.equip_defense),
            equip_crit: clamp(self.equip_crit),
            equip_dodge: clamp(self.equip_dodge),
        }
    }

    /// Whether clamping would change anything
    pub fn has_negative(&self) -> bool {
        self.clamped() != *self
    }
}

/// Combat stats derived from raw inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedStats {
    pub max_health: f64,
    pub damage: f64,
    pub hit: f64,
    pub dodge: f64,
    /// Raw defense before the defense curve
    pub defense_raw: f64,
    /// Fraction of damage blocked, in [0, 0.95]
    pub defense_fraction: f64,
    /// Added damage multiplier on a critical strike
    pub crit_bonus: f64,
}

/// Derive fighter combat stats from raw inputs
///
/// - health = ceil(500 + 100 * alloc) + gear
/// - damage = ceil(100 + 25 * alloc) + gear
/// - hit    = ceil(50 + 50 * alloc) + gear
/// - dodge  = ceil(50 + 50 * alloc) + gear
/// - defense raw = 25 + 10 * alloc + gear (fed through the defense curve)
/// - crit bonus = (0.25 * alloc + gear) / 100
pub fn derive_fighter_stats(inputs: &FighterInputs) -> DerivedStats {
    let defense_raw = 25.0 + 10.0 * inputs.defense_alloc + inputs.equip_defense;
    DerivedStats {
        max_health: (500.0 + 100.0 * inputs.health_alloc).ceil() + inputs.equip_health,
        damage: (100.0 + 25.0 * inputs.damage_alloc).ceil() + inputs.equip_damage,
        hit: (50.0 + 50.0 * inputs.hit_alloc).ceil() + inputs.equip_hit,
        dodge: (50.0 + 50.0 * inputs.dodge_alloc).ceil() + inputs.equip_dodge,
        defense_raw,
        defense_fraction: defense_curve(defense_raw),
        crit_bonus: (0.25 * inputs.crit_alloc + inputs.equip_crit) / 100.0,
    }
}
