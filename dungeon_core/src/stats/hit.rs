//! Hit chance - Attacker hit rating contested against target dodge

use super::constants::{BASE_HIT_CHANCE, CONTESTED_HIT_WEIGHT, MAX_HIT_CHANCE};

/// Chance for an attack to land
///
/// `min(0.25 + hit / (hit + dodge) * 0.75, 0.95)`
///
/// When both ratings are zero the ratio is undefined (NaN) and the
/// comparison `roll < chance` fails, so the attack always misses.
pub fn hit_chance(hit: f64, dodge: f64) -> f64 {
    let chance = BASE_HIT_CHANCE + hit / (hit + dodge) * CONTESTED_HIT_WEIGHT;
    // f64::min would swallow the NaN and turn it into a 95% chance
    if chance > MAX_HIT_CHANCE {
        MAX_HIT_CHANCE
    } else {
        chance
    }
}
