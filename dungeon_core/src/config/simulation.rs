//! Batch simulation settings

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Upper bound on battles in one batch
pub const MAX_BATTLES: u32 = 1_000_000;

/// Settings for a simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Dungeon level the mob squad is generated from
    #[serde(default = "default_dungeon_level")]
    pub dungeon_level: u32,
    /// Independent battles per batch
    #[serde(default = "default_num_battles")]
    pub num_battles: u32,
    /// Base seed; trial `i` uses `seed + i`. Random when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Record and print the journal of a single battle
    #[serde(default)]
    pub verbose: bool,
    /// Roster JSON file
    #[serde(default)]
    pub roster: Option<PathBuf>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            dungeon_level: default_dungeon_level(),
            num_battles: default_num_battles(),
            seed: None,
            verbose: false,
            roster: None,
        }
    }
}

fn default_dungeon_level() -> u32 {
    1
}
fn default_num_battles() -> u32 {
    1000
}

impl SimulationConfig {
    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: SimulationConfig = super::load_toml(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: SimulationConfig = super::parse_toml(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dungeon_level == 0 {
            return Err(ConfigError::ValidationError(
                "dungeon_level must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Battle count clamped to 1..=MAX_BATTLES
    pub fn battles(&self) -> u32 {
        self.num_battles.clamp(1, MAX_BATTLES)
    }
}
