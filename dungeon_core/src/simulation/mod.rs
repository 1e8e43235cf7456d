//! Batch simulation - Win-rate estimation over many independent battles
//!
//! Every trial builds fresh squads and draws from its own `ChaCha8Rng`
//! seeded with `seed + trial_index`, so a batch is reproducible no matter
//! how rayon schedules the trials.

mod report;

pub use report::{BatchReport, Tally};

use crate::battle::{Battle, BattleOutcome};
use crate::config::{SimulationConfig, MAX_BATTLES};
use crate::rng::RandomSource;
use crate::squad::FighterSquad;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Parameters for one batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRequest {
    pub dungeon_level: u32,
    pub num_battles: u32,
    pub seed: u64,
}

impl BatchRequest {
    pub fn new(dungeon_level: u32, num_battles: u32, seed: u64) -> Self {
        BatchRequest { dungeon_level, num_battles, seed }
    }

    /// Request from config; a missing seed is drawn at random
    pub fn from_config(config: &SimulationConfig) -> Self {
        BatchRequest {
            dungeon_level: config.dungeon_level,
            num_battles: config.battles(),
            seed: config.seed.unwrap_or_else(rand::random),
        }
    }

    /// Battle count clamped to 1..=MAX_BATTLES
    pub fn battles(&self) -> u32 {
        self.num_battles.clamp(1, MAX_BATTLES)
    }
}

/// Run one battle of fresh copies of `fighters` against a dungeon level
pub fn run_trial<R: RandomSource + ?Sized>(fighters: &FighterSquad, dungeon_level: u32, rng: &mut R) -> BattleOutcome {
    Battle::for_dungeon_level(fighters, dungeon_level).run(rng)
}

/// Run a batch in parallel
pub fn run_batch(fighters: &FighterSquad, request: &BatchRequest) -> BatchReport {
    let tally = (0..request.battles())
        .into_par_iter()
        .map(|i| {
            let mut rng = ChaCha8Rng::seed_from_u64(request.seed.wrapping_add(i as u64));
            Tally::from_outcome(&run_trial(fighters, request.dungeon_level, &mut rng))
        })
        .reduce(Tally::default, Tally::merge);

    finish(request, tally)
}

/// Run a batch sequentially, every trial drawing from the same source
pub fn run_batch_with<R: RandomSource + ?Sized>(
    fighters: &FighterSquad,
    request: &BatchRequest,
    rng: &mut R,
) -> BatchReport {
    let tally = (0..request.battles())
        .map(|_| Tally::from_outcome(&run_trial(fighters, request.dungeon_level, rng)))
        .fold(Tally::default(), Tally::merge);

    finish(request, tally)
}

/// One batch per level, all with the same battle count and seed
pub fn sweep_levels(fighters: &FighterSquad, levels: &[u32], num_battles: u32, seed: u64) -> Vec<BatchReport> {
    levels
        .iter()
        .map(|&level| run_batch(fighters, &BatchRequest::new(level, num_battles, seed)))
        .collect()
}

fn finish(request: &BatchRequest, tally: Tally) -> BatchReport {
    let report = BatchReport::new(request.dungeon_level, tally);
    debug!(
        level = report.dungeon_level,
        battles = report.battles,
        win_rate = report.win_rate,
        avg_rounds = report.avg_rounds,
        "batch finished"
    );
    report
}
