//! Defense - Raw defense to damage-blocked fraction with diminishing returns

use super::constants::{
    DEFENSE_EXPONENT, DEFENSE_SCALE, DEFENSE_SOFT_CAP, DEFENSE_SOFT_WEIGHT, MAX_DEFENSE_FRACTION,
};

/// Convert raw defense into the fraction of incoming damage it blocks
///
/// Formula:
/// `min(1 - 1 / (1 + (x + min(20000, x) * 9) / 50000)^0.25, 0.95)`
///
/// Defense up to 20000 counts ten times, anything above counts once,
/// so the curve flattens further once raw defense passes the soft cap.
pub fn defense_curve(raw_defense: f64) -> f64 {
    let weighted = raw_defense.min(DEFENSE_SOFT_CAP);
    let effective = (raw_defense + weighted * DEFENSE_SOFT_WEIGHT) / DEFENSE_SCALE;
    let blocked = 1.0 - 1.0 / (1.0 + effective).powf(DEFENSE_EXPONENT);
    blocked.min(MAX_DEFENSE_FRACTION)
}
