//! dungeon_core - Squad combat engine for dungeon runs
//!
//! This library provides:
//! - Stat formulas: raw allocation points + gear into combat stats, mob level scaling
//! - Fighter / Mob: combatants with derived stats and per-battle state
//! - FighterSquad / MobSquad: fixed 3x2 positional grids
//! - Battle: the round loop, class abilities, auras and damage resolution
//! - Batch simulation: parallel win-rate estimation over many independent trials

pub mod battle;
pub mod combatant;
pub mod config;
pub mod error;
pub mod rng;
pub mod roster;
pub mod simulation;
pub mod squad;
pub mod stats;
pub mod text;
pub mod types;

pub mod prelude;

// Re-export core types for convenience
pub use battle::{Battle, BattleEvent, BattleOutcome, OutcomeReason, Winner};
pub use combatant::{Combatant, CombatantKind, Fighter, FighterInputs, Mob};
pub use config::SimulationConfig;
pub use error::CombatError;
pub use rng::{RandomSource, ScriptedRandom};
pub use roster::{FighterRecord, Roster};
pub use simulation::{run_batch, BatchReport, BatchRequest};
pub use squad::{FighterSquad, Grid, MobSquad};
pub use text::{MessageCatalog, TextLookup};
pub use types::{FighterClass, Position, Side};
