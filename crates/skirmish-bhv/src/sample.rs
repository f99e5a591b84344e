//! Fixed or randomized parameters for decorators.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

/// A value that is either fixed or drawn uniformly each time it is needed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Sample<T> {
    Fixed(T),
    /// Floats draw from `[min, max)`, integers from `[min, max]`.
    Uniform(T, T),
}

impl Sample<f64> {
    pub fn draw(&self, rng: &mut dyn RngCore) -> f64 {
        match *self {
            Sample::Fixed(value) => value,
            Sample::Uniform(min, max) if max > min => rng.gen_range(min..max),
            Sample::Uniform(min, _) => min,
        }
    }
}

impl Sample<u32> {
    pub fn draw(&self, rng: &mut dyn RngCore) -> u32 {
        match *self {
            Sample::Fixed(value) => value,
            Sample::Uniform(min, max) if max >= min => rng.gen_range(min..=max),
            Sample::Uniform(min, _) => min,
        }
    }
}
