//! Prelude module for convenient imports
//!
//! ```rust
//! use dungeon_core::prelude::*;
//! ```

// Core types
pub use crate::types::{FighterClass, Position, Side};

// Combatants and squads
pub use crate::combatant::{Combatant, CombatantKind, Fighter, FighterInputs, Mob};
pub use crate::squad::{FighterSquad, Grid, MobSquad};

// Battle
pub use crate::battle::{Battle, BattleOutcome, OutcomeReason, Winner};
pub use crate::rng::{RandomSource, ScriptedRandom};

// Simulation
pub use crate::simulation::{run_batch, BatchReport, BatchRequest};

// Persistence boundary
pub use crate::roster::{FighterRecord, Roster};
