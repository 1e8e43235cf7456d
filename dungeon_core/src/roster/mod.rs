//! Roster - Saved fighter grid and bench
//!
//! A roster file is JSON with a 3x2 row-major `grid` of optional fighter
//! records and a `bench` list. Loading is forgiving: a record that fails to
//! parse or names an unknown class is dropped with a warning, and a grid
//! of the wrong shape is ignored. Only an unreadable file or invalid JSON
//! is an error.

mod record;

pub use record::FighterRecord;

use crate::combatant::{DuplicateOrigin, Fighter, Provenance};
use crate::squad::FighterSquad;
use crate::types::{Position, COLS, ROWS};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// Roster loading error
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Failed to access roster file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse roster JSON: {0}")]
    ParseError(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct RosterFile {
    grid: Vec<Vec<Option<FighterRecord>>>,
    bench: Vec<FighterRecord>,
}

/// Fighters placed on the battle grid plus reserves on the bench
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    grid: FighterSquad,
    bench: Vec<Fighter>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid(&self) -> &FighterSquad {
        &self.grid
    }

    pub fn bench(&self) -> &[Fighter] {
        &self.bench
    }

    /// Place a fighter on the grid, returning any fighter it displaced
    pub fn place(&mut self, pos: Position, fighter: Fighter) -> Option<Fighter> {
        self.grid.place(pos, fighter)
    }

    pub fn remove(&mut self, pos: Position) -> Option<Fighter> {
        self.grid.remove(pos)
    }

    pub fn add_to_bench(&mut self, fighter: Fighter) {
        self.bench.push(fighter);
    }

    /// A battle-ready squad: new fighters at full health with zeroed counters
    pub fn fighter_squad(&self) -> FighterSquad {
        self.grid.fresh()
    }

    /// One past the highest pool index in use
    pub fn next_pool_index(&self) -> u32 {
        self.all_fighters()
            .filter_map(|f| f.provenance.pool_index)
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Copy a fighter as a duplicate with its own pool index
    pub fn duplicate(&self, original: &Fighter) -> Fighter {
        original.fresh().with_provenance(Provenance {
            is_duplicate: true,
            origin: Some(DuplicateOrigin {
                name: original.name.clone(),
                fighter_class: original.fighter_class().name().to_string(),
            }),
            pool_index: Some(self.next_pool_index()),
        })
    }

    /// Parse a roster, dropping malformed fighter records
    pub fn from_json(content: &str) -> Result<Self, RosterError> {
        let root: Value = serde_json::from_str(content)?;
        let mut roster = Roster::new();

        match root.get("grid") {
            Some(Value::Array(rows)) if rows.len() == ROWS => {
                for (row, cells) in rows.iter().enumerate() {
                    let Some(cells) = cells.as_array().filter(|c| c.len() == COLS) else {
                        warn!(row, "ignoring malformed roster row");
                        continue;
                    };
                    for (col, cell) in cells.iter().enumerate() {
                        if let (Some(fighter), Ok(pos)) = (decode_fighter(cell), Position::new(row, col)) {
                            roster.grid.place(pos, fighter);
                        }
                    }
                }
            }
            None | Some(Value::Null) => {}
            Some(_) => warn!("ignoring roster grid that is not 3x2"),
        }

        match root.get("bench") {
            Some(Value::Array(items)) => roster.bench.extend(items.iter().filter_map(decode_fighter)),
            None | Some(Value::Null) => {}
            Some(_) => warn!("ignoring roster bench that is not a list"),
        }

        roster.assign_missing_pool_indices();
        debug!(grid = roster.grid.len(), bench = roster.bench.len(), "roster loaded");
        Ok(roster)
    }

    pub fn to_json(&self) -> Result<String, RosterError> {
        let file = RosterFile {
            grid: (0..ROWS)
                .map(|row| {
                    Position::row_cells(row)
                        .iter()
                        .map(|&pos| self.grid.get(pos).map(Fighter::to_record))
                        .collect()
                })
                .collect(),
            bench: self.bench.iter().map(Fighter::to_record).collect(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    pub fn load(path: &Path) -> Result<Self, RosterError> {
        let content = fs::read_to_string(path)?;
        Roster::from_json(&content)
    }

    pub fn save(&self, path: &Path) -> Result<(), RosterError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Grid fighters in row-major order, then the bench
    fn all_fighters(&self) -> impl Iterator<Item = &Fighter> {
        Position::ROW_MAJOR
            .into_iter()
            .filter_map(|pos| self.grid.get(pos))
            .chain(self.bench.iter())
    }

    fn assign_missing_pool_indices(&mut self) {
        for pos in Position::ROW_MAJOR {
            let next = self.next_pool_index();
            if let Some(fighter) = self.grid.get_mut(pos) {
                fighter.provenance.pool_index.get_or_insert(next);
            }
        }
        for i in 0..self.bench.len() {
            let next = self.next_pool_index();
            self.bench[i].provenance.pool_index.get_or_insert(next);
        }
    }
}

fn decode_fighter(value: &Value) -> Option<Fighter> {
    if value.is_null() {
        return None;
    }
    let record = match FighterRecord::deserialize(value) {
        Ok(record) => record,
        Err(err) => {
            warn!(error = %err, "dropping malformed fighter record");
            return None;
        }
    };
    match record.to_fighter() {
        Ok(fighter) => Some(fighter),
        Err(err) => {
            warn!(error = %err, "dropping invalid fighter record");
            None
        }
    }
}
