//! Squads - Fixed 3x2 grids of optional combatants
//!
//! Column 0 is the front line, column 1 the back line. Every coordinate
//! is a validated [`Position`], so scans never index outside the grid.

mod fighters;
mod mobs;

use crate::combatant::{Combatant, Fighter, Mob};
use crate::types::{Position, CELLS};

/// Player squad
pub type FighterSquad = Grid<Fighter>;
/// Enemy squad
pub type MobSquad = Grid<Mob>;

/// One optional occupant per fixed coordinate
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    cells: [Option<T>; CELLS],
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Grid {
            cells: std::array::from_fn(|_| None),
        }
    }
}

impl<T> Grid<T> {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Put an occupant in a cell, returning the previous one
    pub fn place(&mut self, pos: Position, occupant: T) -> Option<T> {
        self.cells[pos.index()].replace(occupant)
    }

    /// Builder-style [`Grid::place`]
    pub fn with(mut self, pos: Position, occupant: T) -> Self {
        self.place(pos, occupant);
        self
    }

    /// Empty a cell, returning its occupant
    pub fn remove(&mut self, pos: Position) -> Option<T> {
        self.cells[pos.index()].take()
    }

    pub fn get(&self, pos: Position) -> Option<&T> {
        self.cells[pos.index()].as_ref()
    }

    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        self.cells[pos.index()].as_mut()
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        self.cells[pos.index()].is_some()
    }

    /// Whether no cell is occupied
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Number of occupied cells
    pub fn len(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Occupied cells in canonical (column-major) order
    pub fn occupants(&self) -> impl Iterator<Item = (Position, &T)> {
        Position::COLUMN_MAJOR
            .into_iter()
            .filter_map(move |pos| self.get(pos).map(|occupant| (pos, occupant)))
    }
}

impl<T: Combatant> Grid<T> {
    /// First living occupant following a scan order
    pub fn first_living_in(&self, order: &[Position]) -> Option<Position> {
        order
            .iter()
            .copied()
            .find(|&pos| self.get(pos).is_some_and(|c| c.is_alive()))
    }

    /// First living occupant in canonical scan order
    pub fn first_living(&self) -> Option<Position> {
        self.first_living_in(&Position::COLUMN_MAJOR)
    }

    pub fn is_alive_at(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(|c| c.is_alive())
    }

    /// Occupied cells whose occupant is dead, in canonical order
    pub fn dead_positions(&self) -> Vec<Position> {
        self.occupants()
            .filter(|(_, c)| !c.is_alive())
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Sum of current health over all occupants
    pub fn total_health(&self) -> f64 {
        self.occupants().map(|(_, c)| c.stats().current_health).sum()
    }

    /// Hit rating of a cell, zero when empty
    pub fn hit_at(&self, pos: Position) -> f64 {
        self.get(pos).map_or(0.0, |c| c.stats().hit)
    }
}
