//! Target selection rules for class abilities

use crate::combatant::{Combatant, Mob};
use crate::squad::{FighterSquad, Grid};
use crate::types::{FighterClass, Position, COLS, ROWS};

/// Health fraction below which a Sentinel draws attacks
pub const SENTINEL_TAUNT_THRESHOLD: f64 = 0.25;

/// First row (top to bottom) holding a living mob
pub fn hunter_row(mobs: &Grid<Mob>) -> Option<usize> {
    (0..ROWS).find(|&row| Position::row_cells(row).iter().any(|&p| mobs.is_alive_at(p)))
}

/// First column (front to back) holding a living mob
pub fn mage_column(mobs: &Grid<Mob>) -> Option<usize> {
    (0..COLS).find(|&col| Position::column(col).iter().any(|&p| mobs.is_alive_at(p)))
}

/// First living mob scanning the back column before the front
pub fn assassin_target(mobs: &Grid<Mob>) -> Option<Position> {
    mobs.first_living_in(&Position::BACK_FIRST)
}

/// Auras that protect a fighter about to be attacked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuraCheck {
    pub bastion: bool,
    pub paladin: bool,
}

/// Which auras cover the default target of a mob attack
///
/// Auras are evaluated around an anchor: the first living fighter in
/// row-major order sharing the target's class. A living Bastion next to
/// the anchor grants the bastion aura. A living Paladin in the anchor's
/// column grants the paladin aura unless the target is itself a Paladin.
pub fn aura_check(fighters: &FighterSquad, target: Position) -> AuraCheck {
    let Some(class) = fighters.get(target).map(|f| f.fighter_class()) else {
        return AuraCheck::default();
    };
    let Some(anchor) = fighters.first_living_of_class(class, &Position::ROW_MAJOR) else {
        return AuraCheck::default();
    };
    let living = |pos: Position, wanted: FighterClass| {
        fighters
            .get(pos)
            .is_some_and(|f| f.has_class(wanted) && f.is_alive())
    };

    AuraCheck {
        bastion: anchor.neighbors().any(|p| living(p, FighterClass::Bastion)),
        paladin: class != FighterClass::Paladin
            && Position::column(anchor.col())
                .iter()
                .any(|&p| living(p, FighterClass::Paladin)),
    }
}

/// Redirect a mob attack to a Sentinel when the target is badly hurt
pub fn taunt_target(fighters: &FighterSquad, target: Position) -> Position {
    let hurt = fighters
        .get(target)
        .is_some_and(|f| f.health_fraction() < SENTINEL_TAUNT_THRESHOLD);
    if !hurt {
        return target;
    }
    fighters
        .first_living_of_class(FighterClass::Sentinel, &Position::ROW_MAJOR)
        .unwrap_or(target)
}
