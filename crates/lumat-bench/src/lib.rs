//! Benchmark profiles and utilities for the lumat matrix kernel.
//!
//! Provides pre-built [`BenchProfile`]s for benchmarks and examples:
//!
//! - [`reference_profile`]: 8x8, the size the demo entry point uses
//! - [`stress_profile`]: 128x128, to expose the cubic cost of inversion
//! - [`build_matrix`]: deterministic matrix generation via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use lumat_arena::Allocator;
use lumat_matrix::{fill_randomly, FillRange, Matrix, MatrixError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Shape and contents of a benchmark matrix.
#[derive(Clone, Debug)]
pub struct BenchProfile {
    /// Rows and columns of the square matrix.
    pub dimension: usize,
    /// Seed for the fill generator.
    pub seed: u64,
    /// Range fill values are drawn from.
    pub range: FillRange,
}

impl BenchProfile {
    /// Bytes needed for one matrix of this profile.
    pub fn matrix_bytes(&self) -> usize {
        self.dimension * self.dimension * std::mem::size_of::<f64>()
    }

    /// Arena capacity that fits `count` matrices of this profile.
    pub fn arena_capacity(&self, count: usize) -> usize {
        self.matrix_bytes() * count
    }
}

/// Build a reference benchmark profile: 8x8, values in `[-1, 1)`.
pub fn reference_profile(seed: u64) -> BenchProfile {
    BenchProfile {
        dimension: 8,
        seed,
        range: FillRange::default(),
    }
}

/// Build a stress benchmark profile: 128x128.
///
/// Same fill as [`reference_profile`] at 16x the dimension.
pub fn stress_profile(seed: u64) -> BenchProfile {
    BenchProfile {
        dimension: 128,
        seed,
        range: FillRange::default(),
    }
}

/// Build the profile's matrix with storage from `allocator`.
pub fn build_matrix<'a>(
    profile: &BenchProfile,
    allocator: &'a dyn Allocator,
) -> Result<Matrix<'a>, MatrixError> {
    let mut matrix = Matrix::new(profile.dimension, profile.dimension, allocator)?;
    let mut rng = ChaCha8Rng::seed_from_u64(profile.seed);
    fill_randomly(&mut matrix, &mut rng, profile.range);
    Ok(matrix)
}
