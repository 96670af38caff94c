//! Column-swap partial pivoting.
//!
//! At factorization step `column`, the search runs along the fixed row
//! `column` over columns `column..cols`, and the winning column is swapped
//! into place across every row. A caller-supplied permutation records
//! which original column now sits at each position.

use lumat_core::PIVOT_EPSILON;

use crate::matrix::Matrix;

/// Outcome of one pivoting step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PivotOutcome {
    /// The largest candidate magnitude was below [`PIVOT_EPSILON`]; the
    /// matrix is numerically singular at this step.
    pub near_zero: bool,
    /// Two columns were exchanged, flipping the determinant's sign.
    pub swapped: bool,
}

/// Bring the largest-magnitude entry of row `column` (among columns
/// `column..cols`) onto the diagonal by exchanging columns.
///
/// Ties keep the earliest column. When `perms` is given, its entries at
/// `column` and the chosen column are exchanged too. The matrix must be
/// square.
pub fn pivot(matrix: &mut Matrix<'_>, column: usize, perms: Option<&mut [usize]>) -> PivotOutcome {
    debug_assert!(
        matrix.is_square(),
        "pivoting requires a square matrix, got {} x {}",
        matrix.rows(),
        matrix.cols()
    );
    debug_assert!(column < matrix.cols());

    let mut best_value = 0.0;
    let mut best_column = column;
    for (i, value) in matrix.row(column).iter().enumerate().skip(column) {
        let magnitude = value.abs();
        if magnitude > best_value {
            best_value = magnitude;
            best_column = i;
        }
    }

    let near_zero = best_value < PIVOT_EPSILON;
    if best_column == column {
        return PivotOutcome {
            near_zero,
            swapped: false,
        };
    }

    matrix.swap_columns(column, best_column);
    if let Some(perms) = perms {
        perms.swap(column, best_column);
    }
    log::trace!("pivot at column {column}: swapped in column {best_column} (|{best_value}|)");
    PivotOutcome {
        near_zero,
        swapped: true,
    }
}
