//! Batch statistics

use crate::battle::{BattleOutcome, OutcomeReason};
use serde::Serialize;

/// Per-trial counters, merged associatively across workers
///
/// Remaining mob health is always a whole number, so the running sum is
/// exact and the merge order does not change the result.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tally {
    pub battles: u64,
    pub fighter_wins: u64,
    pub exhaustions: u64,
    pub total_rounds: u64,
    pub mob_wins: u64,
    pub surviving_mob_health: f64,
}

impl Tally {
    pub fn from_outcome(outcome: &BattleOutcome) -> Self {
        let mob_won = !outcome.fighters_won();
        Tally {
            battles: 1,
            fighter_wins: u64::from(!mob_won),
            exhaustions: u64::from(outcome.reason == OutcomeReason::Exhausted),
            total_rounds: u64::from(outcome.rounds),
            mob_wins: u64::from(mob_won),
            surviving_mob_health: if mob_won { outcome.remaining_mob_health } else { 0.0 },
        }
    }

    pub fn merge(self, other: Tally) -> Tally {
        Tally {
            battles: self.battles + other.battles,
            fighter_wins: self.fighter_wins + other.fighter_wins,
            exhaustions: self.exhaustions + other.exhaustions,
            total_rounds: self.total_rounds + other.total_rounds,
            mob_wins: self.mob_wins + other.mob_wins,
            surviving_mob_health: self.surviving_mob_health + other.surviving_mob_health,
        }
    }
}

/// Summary of a batch of battles at one dungeon level
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub dungeon_level: u32,
    pub battles: u64,
    pub fighter_wins: u64,
    /// Fighter victory chance in percent
    pub win_rate: f64,
    pub avg_rounds: f64,
    /// Battles lost to the round cap
    pub exhaustions: u64,
    /// Mean remaining mob health over the battles the mobs won, rounded
    pub avg_survivor_health: f64,
    /// Chance in percent of at least one win in 60 attempts
    pub chance_within_60: f64,
}

impl BatchReport {
    pub fn new(dungeon_level: u32, tally: Tally) -> Self {
        let battles = tally.battles.max(1) as f64;
        let mut report = BatchReport {
            dungeon_level,
            battles: tally.battles,
            fighter_wins: tally.fighter_wins,
            win_rate: tally.fighter_wins as f64 / battles * 100.0,
            avg_rounds: tally.total_rounds as f64 / battles,
            exhaustions: tally.exhaustions,
            avg_survivor_health: if tally.mob_wins > 0 {
                (tally.surviving_mob_health / tally.mob_wins as f64).round()
            } else {
                0.0
            },
            chance_within_60: 0.0,
        };
        report.chance_within_60 = report.chance_within(60);
        report
    }

    /// Chance in percent of at least one fighter win over `attempts` battles
    pub fn chance_within(&self, attempts: u32) -> f64 {
        let p = self.win_rate / 100.0;
        (1.0 - (1.0 - p).powf(f64::from(attempts))) * 100.0
    }
}
