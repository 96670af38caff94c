//! The dense matrix type and its storage lifecycle.
//!
//! A [`Matrix`] owns a buffer of `rows * cols` doubles obtained from an
//! [`Allocator`] it borrows. The buffer is released through that same
//! allocator exactly once, when the matrix is dropped.

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};
use std::ptr::{self, NonNull};
use std::slice;

use lumat_arena::Allocator;
use lumat_core::MatrixError;

/// Row-major matrix of `f64` backed by allocator-provided storage.
///
/// Dimensions are fixed at creation. The allocator is not owned: it must
/// outlive the matrix, which the `'a` lifetime enforces.
pub struct Matrix<'a> {
    data: NonNull<f64>,
    rows: usize,
    cols: usize,
    allocator: &'a dyn Allocator,
}

impl<'a> Matrix<'a> {
    /// Create a zero-filled `rows x cols` matrix with storage from `allocator`.
    ///
    /// The block is trusted to satisfy the [`Allocator`] safety contract:
    /// valid for `rows * cols` doubles, aligned for `f64`, and not shared
    /// with any other live block.
    #[allow(unsafe_code)]
    pub fn new(rows: usize, cols: usize, allocator: &'a dyn Allocator) -> Result<Self, MatrixError> {
        let overflow = MatrixError::SizeOverflow { rows, cols };
        let len = rows.checked_mul(cols).ok_or(overflow.clone())?;
        let bytes = len
            .checked_mul(mem::size_of::<f64>())
            .ok_or(overflow)?;
        let block = allocator
            .allocate(bytes)
            .map_err(|source| MatrixError::Allocation { rows, cols, source })?;
        debug_assert_eq!(block.as_ptr() as usize % mem::align_of::<f64>(), 0);
        let data = block.cast::<f64>();
        // SAFETY: `Allocator` is an unsafe trait whose implementors promise
        // a live, exclusive, `f64`-aligned block of `bytes` bytes, i.e. `len`
        // doubles. All-zero bytes are the value 0.0.
        unsafe { ptr::write_bytes(data.as_ptr(), 0, len) };
        Ok(Self {
            data,
            rows,
            cols,
            allocator,
        })
    }

    /// Create a matrix whose rows are copied from `rows`.
    ///
    /// # Panics
    ///
    /// Panics if the rows have differing lengths.
    pub fn from_rows<R: AsRef<[f64]>>(
        rows: &[R],
        allocator: &'a dyn Allocator,
    ) -> Result<Self, MatrixError> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut matrix = Self::new(rows.len(), cols, allocator)?;
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            assert_eq!(row.len(), cols, "row {i} has {} columns, expected {cols}", row.len());
            matrix.row_mut(i).copy_from_slice(row);
        }
        Ok(matrix)
    }

    /// Create a `rows x cols` matrix from row-major `values`.
    ///
    /// # Panics
    ///
    /// Panics if `values.len() != rows * cols`.
    pub fn from_slice(
        rows: usize,
        cols: usize,
        values: &[f64],
        allocator: &'a dyn Allocator,
    ) -> Result<Self, MatrixError> {
        let mut matrix = Self::new(rows, cols, allocator)?;
        assert_eq!(
            values.len(),
            matrix.len(),
            "expected {} values for a {rows} x {cols} matrix",
            matrix.len()
        );
        matrix.as_mut_slice().copy_from_slice(values);
        Ok(matrix)
    }

    /// Create the `n x n` identity matrix.
    pub fn identity(n: usize, allocator: &'a dyn Allocator) -> Result<Self, MatrixError> {
        let mut matrix = Self::new(n, n, allocator)?;
        for i in 0..n {
            matrix[(i, i)] = 1.0;
        }
        Ok(matrix)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of elements (`rows * cols`).
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether the matrix has no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `rows == cols`.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// The allocator that owns this matrix's storage.
    pub fn allocator(&self) -> &'a dyn Allocator {
        self.allocator
    }

    /// All elements in row-major order.
    #[allow(unsafe_code)]
    pub fn as_slice(&self) -> &[f64] {
        // SAFETY: `data` points to `len()` initialised doubles that live
        // as long as `self`.
        unsafe { slice::from_raw_parts(self.data.as_ptr(), self.len()) }
    }

    /// All elements in row-major order, mutably.
    #[allow(unsafe_code)]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        // SAFETY: as in `as_slice`; `&mut self` guarantees exclusive access.
        unsafe { slice::from_raw_parts_mut(self.data.as_ptr(), self.len()) }
    }

    /// Mutable reference to the element at (`row`, `col`).
    ///
    /// Requires `row < rows && col < cols`; checked in debug builds only.
    pub fn at(&mut self, row: usize, col: usize) -> &mut f64 {
        debug_assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {} x {} matrix",
            self.rows,
            self.cols
        );
        let cols = self.cols;
        &mut self.as_mut_slice()[row * cols + col]
    }

    /// Value of the element at (`row`, `col`).
    ///
    /// Requires `row < rows && col < cols`; checked in debug builds only.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        debug_assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {} x {} matrix",
            self.rows,
            self.cols
        );
        self.as_slice()[row * self.cols + col]
    }

    /// Row `row` as a slice.
    pub fn row(&self, row: usize) -> &[f64] {
        debug_assert!(row < self.rows, "row {row} out of bounds ({} rows)", self.rows);
        let start = row * self.cols;
        &self.as_slice()[start..start + self.cols]
    }

    /// Row `row` as a mutable slice.
    pub fn row_mut(&mut self, row: usize) -> &mut [f64] {
        debug_assert!(row < self.rows, "row {row} out of bounds ({} rows)", self.rows);
        let cols = self.cols;
        let start = row * cols;
        &mut self.as_mut_slice()[start..start + cols]
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: f64) {
        self.as_mut_slice().fill(value);
    }

    /// Exchange columns `a` and `b` in every row.
    pub fn swap_columns(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let cols = self.cols;
        for row in self.as_mut_slice().chunks_exact_mut(cols) {
            row.swap(a, b);
        }
    }

    /// A new matrix with the same dimensions and values, backed by a
    /// distinct buffer from the same allocator.
    pub fn copy(&self) -> Result<Matrix<'a>, MatrixError> {
        let mut copy = Matrix::new(self.rows, self.cols, self.allocator)?;
        copy.as_mut_slice().copy_from_slice(self.as_slice());
        Ok(copy)
    }

    /// Like [`copy`](Self::copy), but with storage from another allocator.
    pub fn copy_in<'b>(&self, allocator: &'b dyn Allocator) -> Result<Matrix<'b>, MatrixError> {
        let mut copy = Matrix::new(self.rows, self.cols, allocator)?;
        copy.as_mut_slice().copy_from_slice(self.as_slice());
        Ok(copy)
    }

    /// Element-wise comparison within an absolute tolerance.
    pub fn approx_eq(&self, other: &Matrix<'_>, tolerance: f64) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .as_slice()
                .iter()
                .zip(other.as_slice())
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

impl Drop for Matrix<'_> {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        let bytes = self.len() * mem::size_of::<f64>();
        // SAFETY: `data` came from `allocate(bytes)` on `self.allocator` in
        // `new` and is released only here.
        unsafe { self.allocator.deallocate(self.data.cast::<u8>(), bytes) }
    }
}

impl Index<(usize, usize)> for Matrix<'_> {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        debug_assert!(row < self.rows && col < self.cols);
        &self.as_slice()[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix<'_> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        self.at(row, col)
    }
}

impl PartialEq<Matrix<'_>> for Matrix<'_> {
    fn eq(&self, other: &Matrix<'_>) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.as_slice() == other.as_slice()
    }
}

impl fmt::Debug for Matrix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("allocator", &self.allocator.kind())
            .field("data", &self.as_slice())
            .finish()
    }
}
