//! Dense row-major matrices of `f64` with a column-pivoted LU engine.
//!
//! Storage for every [`Matrix`] comes from a caller-chosen
//! [`Allocator`](lumat_arena::Allocator); the matrix borrows the allocator
//! and hands its buffer back when dropped.
//!
//! # Architecture
//!
//! ```text
//! matrix   Matrix: creation, element access, copy, release on drop
//! ops      multiply / multiply_into
//! pivot    column-swap partial pivoting within a fixed row
//! lu       determinant and inverse on top of pivot
//! fill     seeded random fill
//! format   nested-brace text rendering (Display)
//! ```
//!
//! # Pivoting convention
//!
//! Pivoting searches along row `i` and exchanges *columns*, not rows. The
//! inverse relies on this: its final step writes reconstructed rows back
//! through the recorded column permutation.
//!
//! # Contract violations
//!
//! Shape requirements (square input for determinant and inverse, matching
//! inner dimensions for multiply) and element bounds are checked with
//! `debug_assert!`. Callers are responsible for upholding them in release
//! builds.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod fill;
pub mod format;
pub mod lu;
pub mod matrix;
pub mod ops;
pub mod pivot;

// Public re-exports for the primary API surface.
pub use fill::{fill_randomly, FillRange};
pub use lu::{determinant, inverse};
pub use lumat_core::{MatrixError, PIVOT_EPSILON};
pub use matrix::Matrix;
pub use ops::{multiply, multiply_into};
pub use pivot::{pivot, PivotOutcome};
