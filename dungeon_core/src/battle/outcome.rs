//! BattleOutcome - Terminal result of one trial

use serde::{Deserialize, Serialize};

/// Side that won a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Fighters,
    Mobs,
}

impl Winner {
    pub fn as_str(&self) -> &'static str {
        match self {
            Winner::Fighters => "fighters",
            Winner::Mobs => "mobs",
        }
    }
}

/// Why a battle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeReason {
    /// One side's total health reached zero
    SideDefeated,
    /// The round cap was exceeded; mobs win by default
    Exhausted,
}

impl OutcomeReason {
    /// Message code for the text lookup layer
    pub fn code(&self) -> &'static str {
        match self {
            OutcomeReason::SideDefeated => "HEALTH_0",
            OutcomeReason::Exhausted => "LOSE_DUE_TO_EXHAUST",
        }
    }
}

/// Result of a finished battle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BattleOutcome {
    pub winner: Winner,
    /// Final value of the round counter (starts at 1, at most 301)
    pub rounds: u32,
    pub reason: OutcomeReason,
    /// Sum of current mob health when the battle ended
    pub remaining_mob_health: f64,
}

impl BattleOutcome {
    pub fn fighters_won(&self) -> bool {
        self.winner == Winner::Fighters
    }
}
