//! Mob level scaling
//!
//! Up to level 600 every stat grows linearly. Past 600 the growth rate
//! itself increases every 200 levels: the first chunk grows at twice the
//! base increment, the next at three times, and so on.

use super::constants::{MOB_GROWTH_CHUNK, MOB_LINEAR_LEVEL_CAP};

/// Scale a mob stat to a level
pub fn mob_stat(base: f64, increment: f64, level: u32) -> f64 {
    if level <= MOB_LINEAR_LEVEL_CAP {
        return base + increment * level as f64;
    }

    let mut total = base + increment * MOB_LINEAR_LEVEL_CAP as f64;
    let mut remaining = level - MOB_LINEAR_LEVEL_CAP;
    let mut current_increment = 2.0 * increment;
    while remaining > MOB_GROWTH_CHUNK {
        total += current_increment * MOB_GROWTH_CHUNK as f64;
        remaining -= MOB_GROWTH_CHUNK;
        current_increment += increment;
    }

    total + remaining as f64 * current_increment
}

/// Base value and per-level increment of one mob stat
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MobStatLine {
    pub base: f64,
    pub increment: f64,
}

impl MobStatLine {
    pub const HEALTH: MobStatLine = MobStatLine::new(100.0, 400.0);
    pub const DAMAGE: MobStatLine = MobStatLine::new(25.0, 50.0);
    pub const HIT: MobStatLine = MobStatLine::new(0.0, 50.0);
    pub const DODGE: MobStatLine = MobStatLine::new(0.0, 50.0);
    pub const DEFENSE: MobStatLine = MobStatLine::new(5.0, 10.0);

    pub const fn new(base: f64, increment: f64) -> Self {
        MobStatLine { base, increment }
    }

    /// Value of this stat at a level
    pub fn at(&self, level: u32) -> f64 {
        mob_stat(self.base, self.increment, level)
    }
}
