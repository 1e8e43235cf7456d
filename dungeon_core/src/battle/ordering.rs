//! Per-round attack order

use crate::combatant::{Fighter, Mob};
use crate::squad::Grid;
use crate::types::{Position, Side, CELLS};

/// One entry of the round's action queue
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackSlot {
    pub side: Side,
    pub position: Position,
    /// Hit stat at the start of the round; empty cells sort with 0
    pub hit: f64,
}

/// Build the action queue for a round
///
/// All twelve cells take part, empty ones included. Entries are pushed
/// column-major with the fighter cell before the mob cell, then sorted
/// stably by descending hit, ascending column and ascending row. Exact
/// ties keep fighters ahead of mobs.
pub fn attack_order(fighters: &Grid<Fighter>, mobs: &Grid<Mob>) -> Vec<AttackSlot> {
    let mut slots = Vec::with_capacity(2 * CELLS);
    for position in Position::COLUMN_MAJOR {
        slots.push(AttackSlot {
            side: Side::Fighters,
            position,
            hit: fighters.hit_at(position),
        });
        slots.push(AttackSlot {
            side: Side::Mobs,
            position,
            hit: mobs.hit_at(position),
        });
    }

    slots.sort_by(|a, b| {
        b.hit
            .total_cmp(&a.hit)
            .then(a.position.col().cmp(&b.position.col()))
            .then(a.position.row().cmp(&b.position.row()))
    });
    slots
}
