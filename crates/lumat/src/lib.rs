//! lumat: a dense matrix kernel with column-pivoted LU inversion over
//! pluggable allocators.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! lumat sub-crates. For most users, adding `lumat` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use lumat::prelude::*;
//!
//! // A one-page bump arena backs every matrix below.
//! let arena = LinearArena::with_capacity(4096).unwrap();
//!
//! let a = Matrix::from_rows(&[[4.0, 3.0], [6.0, 3.0]], &arena).unwrap();
//! assert!((determinant(&a).unwrap() + 6.0).abs() < 1e-12);
//!
//! let inv = inverse(&a).unwrap();
//! let product = multiply(&inv, &a).unwrap();
//! assert!(product.approx_eq(&Matrix::identity(2, &arena).unwrap(), 1e-12));
//!
//! // Singular input is an error value, not a crash.
//! let singular = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]], &arena).unwrap();
//! assert_eq!(determinant(&singular).unwrap(), 0.0);
//! assert!(matches!(inverse(&singular), Err(MatrixError::Singular { .. })));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `lumat-core` | Error types and the pivot threshold |
//! | [`alloc`] | `lumat-arena` | `Allocator` trait, heap and bump-arena strategies |
//! | [`matrix`] | `lumat-matrix` | `Matrix`, multiply, pivot, determinant, inverse, fill |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core error types and constants (`lumat-core`).
pub use lumat_core as types;

/// Allocation strategies for matrix storage (`lumat-arena`).
///
/// [`alloc::HeapAllocator`] releases blocks individually;
/// [`alloc::LinearArena`] bumps through a fixed region and frees it once.
/// [`alloc::AnyAllocator`] picks between them at runtime.
pub use lumat_arena as alloc;

/// Dense matrices and the LU engine (`lumat-matrix`).
pub use lumat_matrix as matrix;

/// Common imports for typical lumat usage.
///
/// ```rust
/// use lumat::prelude::*;
/// ```
pub mod prelude {
    // Allocators
    pub use lumat_arena::{
        Allocator, AllocatorKind, AnyAllocator, ArenaConfig, HeapAllocator, LinearArena,
    };

    // Errors
    pub use lumat_arena::ArenaError;
    pub use lumat_core::{AllocError, MatrixError};

    // Matrices and operations
    pub use lumat_matrix::{
        determinant, fill_randomly, inverse, multiply, multiply_into, pivot, FillRange, Matrix,
        PivotOutcome,
    };
}
