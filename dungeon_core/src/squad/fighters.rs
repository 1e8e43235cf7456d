//! Fighter squad helpers

use super::FighterSquad;
use crate::combatant::{Combatant, Fighter};
use crate::types::{FighterClass, Position};

impl FighterSquad {
    /// A copy of the squad with every fighter at full health
    pub fn fresh(&self) -> FighterSquad {
        let mut squad = FighterSquad::new();
        for (pos, fighter) in self.occupants() {
            squad.place(pos, fighter.fresh());
        }
        squad
    }

    /// First living fighter of a class following a scan order
    pub fn first_living_of_class(&self, class: FighterClass, order: &[Position]) -> Option<Position> {
        order.iter().copied().find(|&pos| {
            self.get(pos)
                .is_some_and(|f: &Fighter| f.has_class(class) && f.is_alive())
        })
    }

    /// Whether any living fighter of a class is in the squad
    pub fn has_living(&self, class: FighterClass) -> bool {
        self.first_living_of_class(class, &Position::COLUMN_MAJOR).is_some()
    }
}
