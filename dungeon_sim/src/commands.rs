//! Subcommand implementations
//!
//! Each command returns the text to print so the binary stays a thin shell.

use dungeon_core::battle::Battle;
use dungeon_core::config::{ConfigError, SimulationConfig};
use dungeon_core::roster::{Roster, RosterError};
use dungeon_core::simulation::{run_batch, sweep_levels, BatchReport, BatchRequest};
use dungeon_core::text::{render, MessageCatalog, TextLookup};
use dungeon_core::{Combatant, FighterSquad, MobSquad};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Attempts shown in the "chance within" line
const ATTEMPTS: u32 = 60;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Roster(#[from] RosterError),
    #[error("Failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No roster given; pass --roster or set `roster` in the config")]
    MissingRoster,
}

/// Config file values with command-line overrides applied
#[derive(Debug, Clone)]
pub struct Settings {
    config: SimulationConfig,
}

impl Settings {
    pub fn resolve(config_path: Option<&Path>, roster: Option<PathBuf>) -> Result<Self, CliError> {
        let mut config = match config_path {
            Some(path) => SimulationConfig::load(path)?,
            None => SimulationConfig::default(),
        };
        if roster.is_some() {
            config.roster = roster;
        }
        Ok(Settings { config })
    }

    pub fn with_overrides(
        &self,
        level: Option<u32>,
        battles: Option<u32>,
        seed: Option<u64>,
    ) -> Result<Self, CliError> {
        let mut config = self.config.clone();
        if let Some(level) = level {
            config.dungeon_level = level;
        }
        if let Some(battles) = battles {
            config.num_battles = battles;
        }
        if seed.is_some() {
            config.seed = seed;
        }
        config.validate()?;
        Ok(Settings { config })
    }

    /// Battle-ready squad from the configured roster file
    fn squad(&self) -> Result<FighterSquad, CliError> {
        let path = self.config.roster.as_deref().ok_or(CliError::MissingRoster)?;
        let roster = Roster::load(path)?;
        if roster.grid().is_empty() {
            warn!(path = %path.display(), "roster grid is empty; every battle will be lost");
        }
        Ok(roster.fighter_squad())
    }

    fn seed(&self) -> u64 {
        self.config.seed.unwrap_or_else(rand::random)
    }
}

pub fn run(settings: &Settings, json: bool) -> Result<String, CliError> {
    if settings.config.verbose {
        return log(settings, None, false);
    }

    let squad = settings.squad()?;
    let request = BatchRequest::from_config(&settings.config);
    info!(
        level = request.dungeon_level,
        battles = request.battles(),
        seed = request.seed,
        "running batch"
    );
    let report = run_batch(&squad, &request);

    if json {
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(format_report(&report))
    }
}

pub fn sweep(settings: &Settings, levels: &[u32], json: bool) -> Result<String, CliError> {
    let squad = settings.squad()?;
    let reports = sweep_levels(&squad, levels, settings.config.battles(), settings.seed());

    if json {
        return Ok(serde_json::to_string_pretty(&reports)?);
    }
    let mut lines = vec![format!(
        "{:>6}  {:>8}  {:>7}  {:>10}  {:>9}",
        "level", "win", "rounds", "survivors", "60 tries"
    )];
    lines.extend(reports.iter().map(|r| {
        format!(
            "{:>6}  {:>7.2}%  {:>7.1}  {:>10}  {:>8.2}%",
            r.dungeon_level, r.win_rate, r.avg_rounds, r.avg_survivor_health, r.chance_within_60
        )
    }));
    Ok(lines.join("\n"))
}

pub fn log(settings: &Settings, messages: Option<&Path>, raw: bool) -> Result<String, CliError> {
    let squad = settings.squad()?;
    let catalog = match messages {
        Some(path) => MessageCatalog::load(path)?,
        None => MessageCatalog::english(),
    };
    let lookup: Option<&dyn TextLookup> = if raw { None } else { Some(&catalog) };

    let mut rng = StdRng::seed_from_u64(settings.seed());
    let mut battle = Battle::for_dungeon_level(&squad, settings.config.dungeon_level).with_journal();
    let outcome = battle.run(&mut rng);

    let mut lines: Vec<String> = battle.events().iter().map(|e| e.render(lookup)).collect();
    lines.push(render(lookup, outcome.reason.code(), &[]));
    lines.push(format!(
        "Winner: {} after {} rounds, {} mob health left",
        outcome.winner.as_str(),
        outcome.rounds,
        outcome.remaining_mob_health
    ));
    Ok(lines.join("\n"))
}

pub fn mobs(levels: &[u32]) -> String {
    let mut lines = Vec::new();
    for &level in levels {
        lines.push(format!("Dungeon level {}", level));
        for (pos, mob) in MobSquad::for_dungeon_level(level).occupants() {
            let stats = mob.stats();
            lines.push(format!(
                "  {} L{:<5} health {:>10} damage {:>8} hit {:>8} dodge {:>8} defense {:>5.2}%",
                pos,
                mob.level(),
                stats.max_health,
                stats.damage,
                stats.hit,
                stats.dodge,
                stats.defense_fraction * 100.0
            ));
        }
    }
    lines.join("\n")
}

fn format_report(report: &BatchReport) -> String {
    format!(
        "Victory chance: {:.2}%\nAverage surviving mob health: {}\nChance of a win within {} attempts: {:.2}%",
        report.win_rate,
        report.avg_survivor_health,
        ATTEMPTS,
        report.chance_within(ATTEMPTS)
    )
}
