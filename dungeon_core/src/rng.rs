//! Random sources for battle resolution
//!
//! A battle draws every random value from one ordered stream. Per action
//! the draws happen in this order, each only when it applies: class
//! ability roll, evasion roll, hit roll, crit roll. The priest revival
//! roll and index draw follow at the end of the round.

use rand::Rng;

/// Uniform source of values in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Replays a fixed sequence of values, cycling when exhausted
///
/// Used to drive battles through an exact sequence of rolls in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<f64>) -> Self {
        ScriptedRandom { values, cursor: 0 }
    }

    /// Always returns the same value
    pub fn constant(value: f64) -> Self {
        ScriptedRandom::new(vec![value])
    }

    /// Number of values drawn so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
