//! Core types shared by combatants, squads and the battle engine

use crate::error::CombatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of rows in a squad grid
pub const ROWS: usize = 3;
/// Number of columns in a squad grid (0 = front, 1 = back)
pub const COLS: usize = 2;
/// Number of cells in a squad grid
pub const CELLS: usize = ROWS * COLS;

/// Fighter character class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FighterClass {
    Assassin,
    Brawler,
    Hunter,
    Mage,
    Priest,
    #[serde(rename = "Shadow Dancer")]
    ShadowDancer,
    Berserker,
    Paladin,
    Crusader,
    Sentinel,
    Bastion,
    #[serde(rename = "No Class")]
    NoClass,
}

impl FighterClass {
    /// Get all fighter classes
    pub fn all() -> &'static [FighterClass] {
        &[
            FighterClass::Assassin,
            FighterClass::Brawler,
            FighterClass::Hunter,
            FighterClass::Mage,
            FighterClass::Priest,
            FighterClass::ShadowDancer,
            FighterClass::Berserker,
            FighterClass::Paladin,
            FighterClass::Crusader,
            FighterClass::Sentinel,
            FighterClass::Bastion,
            FighterClass::NoClass,
        ]
    }

    /// Display name, also used as the persisted class value
    pub fn name(&self) -> &'static str {
        match self {
            FighterClass::Assassin => "Assassin",
            FighterClass::Brawler => "Brawler",
            FighterClass::Hunter => "Hunter",
            FighterClass::Mage => "Mage",
            FighterClass::Priest => "Priest",
            FighterClass::ShadowDancer => "Shadow Dancer",
            FighterClass::Berserker => "Berserker",
            FighterClass::Paladin => "Paladin",
            FighterClass::Crusader => "Crusader",
            FighterClass::Sentinel => "Sentinel",
            FighterClass::Bastion => "Bastion",
            FighterClass::NoClass => "No Class",
        }
    }
}

impl fmt::Display for FighterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FighterClass {
    type Err = CombatError;

    /// Accepts display names ("Shadow Dancer") as well as
    /// snake_case / camelCase / lowercase spellings ("shadow_dancer", "shadowDancer").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();

        let class = match key.as_str() {
            "assassin" => FighterClass::Assassin,
            "brawler" => FighterClass::Brawler,
            "hunter" => FighterClass::Hunter,
            "mage" => FighterClass::Mage,
            "priest" => FighterClass::Priest,
            "shadowdancer" => FighterClass::ShadowDancer,
            "berserker" => FighterClass::Berserker,
            "paladin" => FighterClass::Paladin,
            "crusader" => FighterClass::Crusader,
            "sentinel" => FighterClass::Sentinel,
            "bastion" => FighterClass::Bastion,
            "noclass" => FighterClass::NoClass,
            _ => return Err(CombatError::InvalidClass(s.to_string())),
        };
        Ok(class)
    }
}

/// Which squad an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Fighters,
    Mobs,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Fighters => Side::Mobs,
            Side::Mobs => Side::Fighters,
        }
    }
}

/// A validated cell coordinate inside a 3x2 squad grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Canonical scan order: front column top to bottom, then back column
    pub const COLUMN_MAJOR: [Position; CELLS] = [
        Position::at(0, 0),
        Position::at(1, 0),
        Position::at(2, 0),
        Position::at(0, 1),
        Position::at(1, 1),
        Position::at(2, 1),
    ];

    /// Row by row, front cell before back cell
    pub const ROW_MAJOR: [Position; CELLS] = [
        Position::at(0, 0),
        Position::at(0, 1),
        Position::at(1, 0),
        Position::at(1, 1),
        Position::at(2, 0),
        Position::at(2, 1),
    ];

    /// Back column first, used by the Assassin
    pub const BACK_FIRST: [Position; CELLS] = [
        Position::at(0, 1),
        Position::at(1, 1),
        Position::at(2, 1),
        Position::at(0, 0),
        Position::at(1, 0),
        Position::at(2, 0),
    ];

    const fn at(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Create a position, rejecting coordinates outside the grid
    pub fn new(row: usize, col: usize) -> Result<Self, CombatError> {
        if row >= ROWS || col >= COLS {
            return Err(CombatError::InvalidPosition { row, col });
        }
        Ok(Position { row, col })
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Flat index in row-major storage
    pub(crate) fn index(&self) -> usize {
        self.row * COLS + self.col
    }

    /// Orthogonal neighbours inside the grid, in up/down/left/right order
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        DIRECTIONS.into_iter().filter_map(move |(dr, dc)| {
            let row = self.row.checked_add_signed(dr)?;
            let col = self.col.checked_add_signed(dc)?;
            Position::new(row, col).ok()
        })
    }

    /// All three cells of a column, top to bottom
    pub fn column(col: usize) -> [Position; ROWS] {
        [Position::at(0, col), Position::at(1, col), Position::at(2, col)]
    }

    /// Both cells of a row, front then back
    pub fn row_cells(row: usize) -> [Position; COLS] {
        [Position::at(row, 0), Position::at(row, 1)]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
