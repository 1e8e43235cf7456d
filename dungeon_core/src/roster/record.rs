//! FighterRecord - Persisted shape of a single fighter

use crate::combatant::{DuplicateOrigin, Fighter, FighterInputs, Provenance};
use crate::error::CombatError;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A fighter as stored by the roster editor
///
/// Field names follow the saved roster format. Every numeric field
/// defaults to 0 when missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FighterRecord {
    pub fighter_class: String,
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub fighter_health: f64,
    #[serde(default)]
    pub fighter_damage: f64,
    #[serde(default)]
    pub fighter_hit: f64,
    #[serde(default)]
    pub fighter_defense: f64,
    #[serde(default)]
    pub fighter_crit: f64,
    #[serde(default)]
    pub fighter_dodge: f64,

    #[serde(default)]
    pub object_health: f64,
    #[serde(default)]
    pub object_damage: f64,
    #[serde(default)]
    pub object_hit: f64,
    #[serde(default)]
    pub object_defense: f64,
    #[serde(default)]
    pub object_crit: f64,
    #[serde(default)]
    pub object_dodge: f64,

    #[serde(rename = "isDuplicate", default)]
    pub is_duplicate: bool,
    #[serde(default)]
    pub base: Option<DuplicateOrigin>,
    #[serde(rename = "poolIndex", default)]
    pub pool_index: Option<u32>,
}

impl FighterRecord {
    /// A record with all stat inputs at zero
    pub fn new(fighter_class: &str, name: Option<&str>) -> Self {
        FighterRecord::from_inputs(fighter_class, name, &FighterInputs::default())
    }

    pub fn from_inputs(fighter_class: &str, name: Option<&str>, inputs: &FighterInputs) -> Self {
        FighterRecord {
            fighter_class: fighter_class.to_string(),
            name: name.map(str::to_string),
            fighter_health: inputs.health_alloc,
            fighter_damage: inputs.damage_alloc,
            fighter_hit: inputs.hit_alloc,
            fighter_defense: inputs.defense_alloc,
            fighter_crit: inputs.crit_alloc,
            fighter_dodge: inputs.dodge_alloc,
            object_health: inputs.equip_health,
            object_damage: inputs.equip_damage,
            object_hit: inputs.equip_hit,
            object_defense: inputs.equip_defense,
            object_crit: inputs.equip_crit,
            object_dodge: inputs.equip_dodge,
            is_duplicate: false,
            base: None,
            pool_index: None,
        }
    }

    /// Raw stat inputs as stored, without clamping
    pub fn inputs(&self) -> FighterInputs {
        FighterInputs {
            health_alloc: self.fighter_health,
            damage_alloc: self.fighter_damage,
            hit_alloc: self.fighter_hit,
            defense_alloc: self.fighter_defense,
            crit_alloc: self.fighter_crit,
            dodge_alloc: self.fighter_dodge,
            equip_health: self.object_health,
            equip_damage: self.object_damage,
            equip_hit: self.object_hit,
            equip_defense: self.object_defense,
            equip_crit: self.object_crit,
            equip_dodge: self.object_dodge,
        }
    }

    pub fn provenance(&self) -> Provenance {
        Provenance {
            is_duplicate: self.is_duplicate,
            origin: self.base.clone(),
            pool_index: self.pool_index,
        }
    }

    /// Build a full-health fighter, clamping negative inputs to zero
    pub fn to_fighter(&self) -> Result<Fighter, CombatError> {
        let raw = self.inputs();
        if raw.has_negative() {
            warn!(
                fighter = self.name.as_deref().unwrap_or(&self.fighter_class),
                "negative stat inputs clamped to zero"
            );
        }
        let fighter = Fighter::from_class_name(&self.fighter_class, self.name.as_deref(), raw.clamped())?;
        Ok(fighter.with_provenance(self.provenance()))
    }
}

impl From<&Fighter> for FighterRecord {
    fn from(fighter: &Fighter) -> Self {
        let provenance = &fighter.provenance;
        FighterRecord {
            is_duplicate: provenance.is_duplicate,
            base: provenance.origin.clone(),
            pool_index: provenance.pool_index,
            ..FighterRecord::from_inputs(
                fighter.fighter_class().name(),
                Some(&fighter.name),
                fighter.inputs(),
            )
        }
    }
}

impl Fighter {
    /// Persistable record of this fighter's raw inputs and provenance
    pub fn to_record(&self) -> FighterRecord {
        FighterRecord::from(self)
    }
}
