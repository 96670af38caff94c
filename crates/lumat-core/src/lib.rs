//! Core error types and constants for the lumat matrix kernel.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! error taxonomy shared by the allocator and matrix crates, and the
//! numeric threshold used to detect singular pivots.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;

pub use error::{AllocError, MatrixError};

/// Pivot magnitudes strictly below this value are treated as zero.
///
/// Equal to the machine epsilon of `f64`. Used by both determinant and
/// inverse to decide that a matrix is numerically singular.
pub const PIVOT_EPSILON: f64 = f64::EPSILON;
