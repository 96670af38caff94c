//! Matrix multiplication.

use lumat_core::MatrixError;

use crate::matrix::Matrix;

/// Product `left * right`, allocated from `left`'s allocator.
///
/// Requires `left.cols() == right.rows()`; checked in debug builds only.
pub fn multiply<'a>(left: &Matrix<'a>, right: &Matrix<'_>) -> Result<Matrix<'a>, MatrixError> {
    let mut out = Matrix::new(left.rows(), right.cols(), left.allocator())?;
    multiply_into(&mut out, left, right);
    Ok(out)
}

/// Overwrite `out` with `left * right`.
///
/// For each row of `left` and each shared index, the scaled row of `right`
/// is accumulated into the output row. `out` must be
/// `left.rows() x right.cols()`.
pub fn multiply_into(out: &mut Matrix<'_>, left: &Matrix<'_>, right: &Matrix<'_>) {
    debug_assert_eq!(
        left.cols(),
        right.rows(),
        "cannot multiply {} x {} by {} x {}",
        left.rows(),
        left.cols(),
        right.rows(),
        right.cols()
    );
    debug_assert!(
        out.rows() == left.rows() && out.cols() == right.cols(),
        "output is {} x {}, product is {} x {}",
        out.rows(),
        out.cols(),
        left.rows(),
        right.cols()
    );
    out.fill(0.0);
    for i in 0..left.rows() {
        let out_row = out.row_mut(i);
        for (j, &factor) in left.row(i).iter().enumerate() {
            for (acc, &value) in out_row.iter_mut().zip(right.row(j)) {
                *acc += factor * value;
            }
        }
    }
}

impl<'a> Matrix<'a> {
    /// Product `self * right`; see [`multiply`].
    pub fn multiply(&self, right: &Matrix<'_>) -> Result<Matrix<'a>, MatrixError> {
        multiply(self, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumat_arena::{HeapAllocator, LinearArena};

    #[test]
    fn multiplies_rectangular_shapes() {
        let heap = HeapAllocator;
        let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]], &heap).unwrap();
        let b = Matrix::from_rows(&[[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]], &heap).unwrap();
        let c = multiply(&a, &b).unwrap();
        assert_eq!(c.rows(), 2);
        assert_eq!(c.cols(), 2);
        assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
    }

    #[test]
    fn identity_is_neutral() {
        let heap = HeapAllocator;
        let a = Matrix::from_rows(&[[2.0, -1.0], [0.5, 3.0]], &heap).unwrap();
        let id = Matrix::identity(2, &heap).unwrap();
        assert_eq!(multiply(&a, &id).unwrap(), a);
        assert_eq!(multiply(&id, &a).unwrap(), a);
    }

    #[test]
    fn result_comes_from_left_allocator() {
        let heap = HeapAllocator;
        let arena = LinearArena::with_capacity(256).unwrap();
        let left = Matrix::from_rows(&[[1.0, 2.0]], &arena).unwrap();
        let right = Matrix::from_rows(&[[3.0], [4.0]], &heap).unwrap();
        let used = arena.used();
        let product = left.multiply(&right).unwrap();
        assert_eq!(product.as_slice(), &[11.0]);
        assert_eq!(arena.used(), used + 8);
    }

    #[test]
    fn multiply_into_overwrites_previous_contents() {
        let heap = HeapAllocator;
        let a = Matrix::from_rows(&[[1.0, 1.0], [0.0, 1.0]], &heap).unwrap();
        let mut out = Matrix::from_rows(&[[9.0, 9.0], [9.0, 9.0]], &heap).unwrap();
        multiply_into(&mut out, &a, &a);
        assert_eq!(out.as_slice(), &[1.0, 2.0, 0.0, 1.0]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "cannot multiply")]
    fn mismatched_inner_dimensions_are_a_contract_breach() {
        let heap = HeapAllocator;
        let a = Matrix::new(2, 3, &heap).unwrap();
        let b = Matrix::new(2, 3, &heap).unwrap();
        let _ = multiply(&a, &b);
    }
}
