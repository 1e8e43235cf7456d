//! dungeon_sim - Command-line battle simulator for dungeon squads

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Simulate squad battles against dungeon mobs
#[derive(Parser, Debug)]
#[command(name = "dungeon_sim")]
#[command(about = "Estimate win rates of a fighter squad against dungeon levels")]
struct Cli {
    /// Simulation config (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Roster file (JSON); overrides the roster named in the config
    #[arg(long, global = true)]
    roster: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a batch of battles at one dungeon level
    Run {
        #[arg(long)]
        level: Option<u32>,
        /// Number of battles (1 to 1,000,000)
        #[arg(long)]
        battles: Option<u32>,
        /// Base seed for deterministic runs
        #[arg(long)]
        seed: Option<u64>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run one batch per level
    Sweep {
        /// Comma-separated dungeon levels
        #[arg(long, value_delimiter = ',', required = true)]
        levels: Vec<u32>,
        #[arg(long)]
        battles: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        json: bool,
    },
    /// Run a single battle and print its journal
    Log {
        #[arg(long)]
        level: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Message templates (TOML); built-in English when absent
        #[arg(long)]
        messages: Option<PathBuf>,
        /// Print raw message codes instead of text
        #[arg(long)]
        raw: bool,
    },
    /// Print the mob squad generated for each level
    Mobs {
        #[arg(long, value_delimiter = ',', default_values_t = [1, 100, 600, 1000])]
        levels: Vec<u32>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = commands::Settings::resolve(cli.config.as_deref(), cli.roster)?;

    let output = match cli.command {
        Command::Run { level, battles, seed, json } => {
            commands::run(&settings.with_overrides(level, battles, seed)?, json)?
        }
        Command::Sweep { levels, battles, seed, json } => {
            commands::sweep(&settings.with_overrides(None, battles, seed)?, &levels, json)?
        }
        Command::Log { level, seed, messages, raw } => {
            commands::log(&settings.with_overrides(level, None, seed)?, messages.as_deref(), raw)?
        }
        Command::Mobs { levels } => commands::mobs(&levels),
    };

    println!("{}", output);
    Ok(())
}
