//! Random fill for test and demo matrices.
//!
//! The generator is always supplied by the caller, typically a seeded
//! `ChaCha8Rng`, so fills are reproducible and no global RNG state exists.

use rand::Rng;

use crate::matrix::Matrix;

/// Range that random fill values are drawn from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillRange {
    /// Inclusive lower bound.
    pub min: f64,
    /// Exclusive upper bound.
    pub max: f64,
}

impl FillRange {
    /// Values in `[min, max)`.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Draw one value. A degenerate range (`min == max`) always yields `min`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        self.min + rng.random::<f64>() * (self.max - self.min)
    }
}

impl Default for FillRange {
    fn default() -> Self {
        Self::new(-1.0, 1.0)
    }
}

/// Overwrite every element of `matrix` with a value drawn from `range`.
pub fn fill_randomly<R: Rng>(matrix: &mut Matrix<'_>, rng: &mut R, range: FillRange) {
    for value in matrix.as_mut_slice() {
        *value = range.sample(rng);
    }
}
