//! Stat formulas - Allocation scaling, defense curve, mob level scaling, hit chance

mod allocation;
mod defense;
mod hit;
mod scaling;

pub use allocation::{derive_fighter_stats, DerivedStats, FighterInputs};
pub use defense::defense_curve;
pub use hit::hit_chance;
pub use scaling::{mob_stat, MobStatLine};

/// Combat formula constants
pub mod constants {
    /// Hard cap on the fraction of damage blocked by defense
    pub const MAX_DEFENSE_FRACTION: f64 = 0.95;

    /// Raw defense scale in the defense curve denominator
    pub const DEFENSE_SCALE: f64 = 50_000.0;

    /// Raw defense beyond this only counts once (no 9x weighting)
    pub const DEFENSE_SOFT_CAP: f64 = 20_000.0;

    /// Weight applied to raw defense up to the soft cap
    pub const DEFENSE_SOFT_WEIGHT: f64 = 9.0;

    /// Exponent of the defense curve
    pub const DEFENSE_EXPONENT: f64 = 0.25;

    /// Minimum hit chance of any attack
    pub const BASE_HIT_CHANCE: f64 = 0.25;

    /// Portion of hit chance decided by hit vs dodge
    pub const CONTESTED_HIT_WEIGHT: f64 = 0.75;

    /// Maximum hit chance of a dodgeable attack
    pub const MAX_HIT_CHANCE: f64 = 0.95;

    /// Chance of a critical strike on a landed hit
    pub const CRIT_CHANCE: f64 = 0.10;

    /// Mob level past which the growth rate itself starts increasing
    pub const MOB_LINEAR_LEVEL_CAP: u32 = 600;

    /// Size of each accelerating growth chunk past the linear cap
    pub const MOB_GROWTH_CHUNK: u32 = 200;
}
