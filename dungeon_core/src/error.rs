//! Construction errors for combatants and squads

use thiserror::Error;

/// Rejected construction of a combat entity
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CombatError {
    #[error("Invalid fighter class: {0}")]
    InvalidClass(String),
    #[error("Invalid grid position: row {row}, column {col}")]
    InvalidPosition { row: usize, col: usize },
}
