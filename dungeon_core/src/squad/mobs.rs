//! Mob squad generation from a dungeon level

use super::MobSquad;
use crate::combatant::Mob;
use crate::types::Position;

/// Extra mob slots: (row, col, level offset)
///
/// A slot holds a mob of `level - offset`, present only when that
/// reduced level is itself at least `offset`.
const EXTRA_SLOTS: [(usize, usize, u32); 5] = [
    (1, 0, 25),
    (2, 0, 50),
    (0, 1, 75),
    (1, 1, 100),
    (2, 1, 125),
];

impl MobSquad {
    /// Build the enemy squad for a dungeon level
    ///
    /// The front-top cell always holds a mob at the dungeon level; the
    /// other five unlock as the level grows.
    pub fn for_dungeon_level(level: u32) -> MobSquad {
        let mut squad = MobSquad::new();
        squad.place(Position::COLUMN_MAJOR[0], Mob::new(level));

        for (row, col, offset) in EXTRA_SLOTS {
            let Some(mob_level) = level.checked_sub(offset) else {
                continue;
            };
            if mob_level < offset {
                continue;
            }
            if let Ok(pos) = Position::new(row, col) {
                squad.place(pos, Mob::new(mob_level));
            }
        }

        squad
    }
}
