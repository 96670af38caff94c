//! Reference matrices and tolerance assertions.
//!
//! Row data is exposed as plain arrays so tests can build a matrix with
//! whichever allocator they are exercising.

use lumat_arena::Allocator;
use lumat_matrix::{fill_randomly, FillRange, Matrix};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// `[[4, 3], [6, 3]]`: determinant -6.
pub const KNOWN_2X2: [[f64; 2]; 2] = [[4.0, 3.0], [6.0, 3.0]];

/// Inverse of [`KNOWN_2X2`].
pub const KNOWN_2X2_INVERSE: [[f64; 2]; 2] = [[-0.5, 0.5], [1.0, -2.0 / 3.0]];

/// Second row is twice the first: determinant 0, not invertible.
pub const SINGULAR_2X2: [[f64; 2]; 2] = [[1.0, 2.0], [2.0, 4.0]];

/// Needs column swaps during factorization; determinant 1.
pub const PIVOTING_3X3: [[f64; 3]; 3] = [[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]];

/// Inverse of [`PIVOTING_3X3`].
pub const PIVOTING_3X3_INVERSE: [[f64; 3]; 3] =
    [[-24.0, 18.0, 5.0], [20.0, -15.0, -4.0], [-5.0, 4.0, 1.0]];

/// Symmetric, diagonally dominant; determinant 18.
pub const TRIDIAGONAL_3X3: [[f64; 3]; 3] = [[2.0, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 4.0]];

/// An `n x n` matrix filled from a ChaCha8 stream seeded with `seed`,
/// values in `[-1, 1)`.
pub fn random_matrix<'a>(n: usize, seed: u64, allocator: &'a dyn Allocator) -> Matrix<'a> {
    let mut matrix = Matrix::new(n, n, allocator).expect("test matrix allocation");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    fill_randomly(&mut matrix, &mut rng, FillRange::default());
    matrix
}

/// Assert element-wise agreement within `tolerance`.
#[track_caller]
pub fn assert_approx_eq(actual: &Matrix<'_>, expected: &Matrix<'_>, tolerance: f64) {
    assert_eq!(
        (actual.rows(), actual.cols()),
        (expected.rows(), expected.cols()),
        "shape mismatch"
    );
    for i in 0..actual.rows() {
        for j in 0..actual.cols() {
            let (a, e) = (actual.get(i, j), expected.get(i, j));
            assert!(
                (a - e).abs() <= tolerance,
                "element ({i}, {j}): {a} vs expected {e} (tolerance {tolerance})\nactual: {actual}"
            );
        }
    }
}

/// Assert that `matrix` is square and within `tolerance` of the identity.
#[track_caller]
pub fn assert_near_identity(matrix: &Matrix<'_>, tolerance: f64) {
    assert!(matrix.is_square(), "{} x {} is not square", matrix.rows(), matrix.cols());
    for i in 0..matrix.rows() {
        for j in 0..matrix.cols() {
            let expected = if i == j { 1.0 } else { 0.0 };
            let value = matrix.get(i, j);
            assert!(
                (value - expected).abs() <= tolerance,
                "element ({i}, {j}) = {value}, expected {expected}\nmatrix: {matrix}"
            );
        }
    }
}
