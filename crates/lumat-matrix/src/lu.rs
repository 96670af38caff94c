//! Determinant and inverse via in-place LU factorization.
//!
//! Both operations work on a copy of the input and pivot with
//! [`pivot`](crate::pivot::pivot) (column swaps within the pivot row).
//!
//! The inverse folds three phases into one buffer:
//!
//! ```text
//! forward   eliminate below the diagonal, store the multipliers in place
//!           and apply them to the columns already processed, leaving the
//!           inverse of the unit lower factor below the diagonal
//! backward  invert the upper factor in place, last column first
//! rebuild   multiply the two inverted factors into a fresh buffer, then
//!           write its rows back through the column permutation
//! ```

use smallvec::SmallVec;

use lumat_arena::HeapAllocator;
use lumat_core::MatrixError;

use crate::matrix::Matrix;
use crate::pivot::pivot;

/// Permutations up to this length stay on the stack.
const INLINE_PERMS: usize = 16;

/// Split square row-major storage into row `i` and the rows below it.
fn pivot_row_and_below(
    data: &mut [f64],
    n: usize,
    i: usize,
) -> (&mut [f64], std::slice::ChunksExactMut<'_, f64>) {
    let (head, tail) = data.split_at_mut((i + 1) * n);
    (&mut head[i * n..], tail.chunks_exact_mut(n))
}

/// Split square row-major storage into the rows above `i` and row `i`.
fn rows_above_and_pivot_row(
    data: &mut [f64],
    n: usize,
    i: usize,
) -> (std::slice::ChunksExactMut<'_, f64>, &mut [f64]) {
    let (head, tail) = data.split_at_mut(i * n);
    (head.chunks_exact_mut(n), &mut tail[..n])
}

/// Determinant of a square matrix.
///
/// A numerically singular matrix yields exactly `0.0`; this is not an
/// error. The only failure is being unable to allocate the working copy.
pub fn determinant(matrix: &Matrix<'_>) -> Result<f64, MatrixError> {
    debug_assert!(
        matrix.is_square(),
        "determinant requires a square matrix, got {} x {}",
        matrix.rows(),
        matrix.cols()
    );
    let n = matrix.cols();
    let mut upper = matrix.copy()?;
    let mut det = 1.0;

    for i in 0..n {
        let outcome = pivot(&mut upper, i, None);
        if outcome.near_zero {
            log::debug!("determinant: near-zero pivot at column {i}, matrix is singular");
            return Ok(0.0);
        }
        if outcome.swapped {
            det = -det;
        }

        let (pivot_row, below) = pivot_row_and_below(upper.as_mut_slice(), n, i);
        let diagonal = pivot_row[i];
        det *= diagonal;

        for row in below {
            let factor = -row[i] / diagonal;
            for (value, &p) in row[i + 1..].iter_mut().zip(&pivot_row[i + 1..]) {
                *value += factor * p;
            }
        }
    }

    Ok(det)
}

/// Inverse of a square matrix, allocated from the input's allocator.
///
/// Returns [`MatrixError::Singular`] when a pivot falls below
/// [`PIVOT_EPSILON`](lumat_core::PIVOT_EPSILON). The reconstruction buffer
/// and the permutation are transient heap storage, released on every path.
pub fn inverse<'a>(matrix: &Matrix<'a>) -> Result<Matrix<'a>, MatrixError> {
    debug_assert!(
        matrix.is_square(),
        "inverse requires a square matrix, got {} x {}",
        matrix.rows(),
        matrix.cols()
    );
    let n = matrix.cols();
    let mut lu = matrix.copy()?;
    let mut perms: SmallVec<[usize; INLINE_PERMS]> = (0..n).collect();

    // Forward pass.
    for i in 0..n {
        if pivot(&mut lu, i, Some(perms.as_mut_slice())).near_zero {
            log::debug!("inverse: near-zero pivot at column {i}, matrix is not invertible");
            return Err(MatrixError::Singular { column: i });
        }

        let (pivot_row, below) = pivot_row_and_below(lu.as_mut_slice(), n, i);
        let diagonal = pivot_row[i];
        for row in below {
            let factor = -row[i] / diagonal;
            row[i] = factor;
            for (value, &p) in row[i + 1..].iter_mut().zip(&pivot_row[i + 1..]) {
                *value += factor * p;
            }
            // Invert the lower factor.
            for (value, &p) in row[..i].iter_mut().zip(&pivot_row[..i]) {
                *value += factor * p;
            }
        }
    }

    // Invert the upper factor.
    for i in (0..n).rev() {
        let (above, pivot_row) = rows_above_and_pivot_row(lu.as_mut_slice(), n, i);
        let diagonal = pivot_row[i];
        for row in above.rev() {
            let factor = -row[i] / diagonal;
            row[i] = factor;
            for (value, &p) in row[i + 1..].iter_mut().zip(&pivot_row[i + 1..]) {
                *value += factor * p;
            }
        }

        let reciprocal = 1.0 / diagonal;
        pivot_row[i] = reciprocal;
        for value in &mut pivot_row[i + 1..] {
            *value *= reciprocal;
        }
    }

    // Multiply the inverted factors.
    let heap = HeapAllocator::new();
    let mut product = Matrix::new(n, n, &heap)?;
    for i in 0..n {
        let out = product.row_mut(i);
        for j in i..n {
            let factor = lu.get(i, j);
            out[j] += factor;
            for (value, &l) in out[..j].iter_mut().zip(&lu.row(j)[..j]) {
                *value += factor * l;
            }
        }
    }

    // Undo the column permutation on the rows of the result.
    for (i, &target) in perms.iter().enumerate() {
        lu.row_mut(target).copy_from_slice(product.row(i));
    }

    Ok(lu)
}

impl<'a> Matrix<'a> {
    /// Determinant of this square matrix; see [`determinant`].
    pub fn determinant(&self) -> Result<f64, MatrixError> {
        determinant(self)
    }

    /// Inverse of this square matrix; see [`inverse`].
    pub fn inverse(&self) -> Result<Matrix<'a>, MatrixError> {
        inverse(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumat_arena::LinearArena;

    const TOL: f64 = 1e-9;

    #[test]
    fn determinant_of_known_2x2() {
        let heap = HeapAllocator;
        let a = Matrix::from_rows(&[[4.0, 3.0], [6.0, 3.0]], &heap).unwrap();
        assert!((determinant(&a).unwrap() + 6.0).abs() < TOL);
    }

    #[test]
    fn determinant_of_duplicated_row_is_exactly_zero() {
        let heap = HeapAllocator;
        let a = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]], &heap).unwrap();
        assert_eq!(determinant(&a).unwrap(), 0.0);
    }

    #[test]
    fn determinant_of_zero_1x1_is_zero() {
        let heap = HeapAllocator;
        let a = Matrix::from_rows(&[[0.0]], &heap).unwrap();
        assert_eq!(a.determinant().unwrap(), 0.0);
    }

    #[test]
    fn determinant_of_permutation_is_minus_one() {
        let heap = HeapAllocator;
        let a = Matrix::from_rows(&[[0.0, 1.0], [1.0, 0.0]], &heap).unwrap();
        assert_eq!(determinant(&a).unwrap(), -1.0);
    }

    #[test]
    fn determinant_of_empty_matrix_is_one() {
        let heap = HeapAllocator;
        let a = Matrix::new(0, 0, &heap).unwrap();
        assert_eq!(determinant(&a).unwrap(), 1.0);
    }

    #[test]
    fn determinant_leaves_input_untouched() {
        let heap = HeapAllocator;
        let a = Matrix::from_rows(&[[1.0, 5.0], [2.0, 3.0]], &heap).unwrap();
        let before = a.copy().unwrap();
        determinant(&a).unwrap();
        assert_eq!(a, before);
    }

    #[test]
    fn inverse_of_known_2x2() {
        let heap = HeapAllocator;
        let a = Matrix::from_rows(&[[4.0, 3.0], [6.0, 3.0]], &heap).unwrap();
        let inv = inverse(&a).unwrap();
        let expected = Matrix::from_rows(&[[-0.5, 0.5], [1.0, -2.0 / 3.0]], &heap).unwrap();
        assert!(inv.approx_eq(&expected, TOL), "{inv:?}");
    }

    #[test]
    fn inverse_of_3x3_with_pivoting() {
        let heap = HeapAllocator;
        let a = Matrix::from_rows(
            &[[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]],
            &heap,
        )
        .unwrap();
        let inv = a.inverse().unwrap();
        let expected = Matrix::from_rows(
            &[[-24.0, 18.0, 5.0], [20.0, -15.0, -4.0], [-5.0, 4.0, 1.0]],
            &heap,
        )
        .unwrap();
        assert!(inv.approx_eq(&expected, 1e-9), "{inv:?}");
    }

    #[test]
    fn inverse_of_singular_matrix_fails() {
        let heap = HeapAllocator;
        let a = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]], &heap).unwrap();
        assert_eq!(inverse(&a), Err(MatrixError::Singular { column: 1 }));
    }

    #[test]
    fn inverse_of_zero_1x1_fails_at_first_column() {
        let heap = HeapAllocator;
        let a = Matrix::from_rows(&[[0.0]], &heap).unwrap();
        assert_eq!(a.inverse(), Err(MatrixError::Singular { column: 0 }));
    }

    #[test]
    fn inverse_of_permutation_is_its_transpose() {
        let heap = HeapAllocator;
        let a = Matrix::from_rows(
            &[[0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]],
            &heap,
        )
        .unwrap();
        let inv = inverse(&a).unwrap();
        let expected = Matrix::from_rows(
            &[[0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            &heap,
        )
        .unwrap();
        assert!(inv.approx_eq(&expected, TOL), "{inv:?}");
    }

    #[test]
    fn inverse_lives_in_the_input_arena() {
        let arena = LinearArena::with_capacity(4096).unwrap();
        let a = Matrix::from_rows(&[[2.0, 0.0], [0.0, 4.0]], &arena).unwrap();
        let before = arena.used();
        let inv = inverse(&a).unwrap();
        // Only the working copy, which becomes the result, is taken from
        // the arena.
        assert_eq!(arena.used(), before + 32);
        assert_eq!(inv.as_slice(), &[0.5, 0.0, 0.0, 0.25]);
    }

    #[test]
    fn inverse_reports_arena_exhaustion() {
        let arena = LinearArena::with_capacity(32).unwrap();
        let a = Matrix::from_rows(&[[2.0, 0.0], [0.0, 4.0]], &arena).unwrap();
        let err = inverse(&a).unwrap_err();
        assert!(err.is_allocation(), "{err}");
    }

    #[test]
    fn inverse_times_input_is_identity() {
        let heap = HeapAllocator;
        let a = Matrix::from_rows(
            &[[2.0, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 4.0]],
            &heap,
        )
        .unwrap();
        let product = inverse(&a).unwrap().multiply(&a).unwrap();
        let id = Matrix::identity(3, &heap).unwrap();
        assert!(product.approx_eq(&id, TOL), "{product:?}");
    }
}
