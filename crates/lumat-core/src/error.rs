//! Error types for the lumat matrix kernel.
//!
//! Organized by subsystem: allocation (heap and arena) and matrix
//! operations. None of these errors are retried internally; callers decide
//! whether a failure terminates the program.

use std::error::Error;
use std::fmt;

/// Errors returned by an allocator's `allocate`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// The general-purpose heap could not satisfy the request.
    OutOfMemory {
        /// Number of bytes requested.
        requested: usize,
    },
    /// A bump arena does not have enough space left for the request.
    ArenaExhausted {
        /// Number of bytes requested, after alignment.
        requested: usize,
        /// Bytes already handed out by the arena.
        used: usize,
        /// Total capacity of the arena in bytes.
        capacity: usize,
    },
    /// The size cannot be expressed as a valid allocation layout.
    InvalidLayout {
        /// Number of bytes requested.
        size: usize,
        /// Alignment the allocator tried to honour.
        align: usize,
    },
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory { requested } => {
                write!(f, "out of memory: failed to allocate {requested} bytes")
            }
            Self::ArenaExhausted {
                requested,
                used,
                capacity,
            } => {
                write!(
                    f,
                    "arena exhausted: requested {requested} bytes, {used} of {capacity} bytes in use"
                )
            }
            Self::InvalidLayout { size, align } => {
                write!(f, "invalid layout: {size} bytes aligned to {align}")
            }
        }
    }
}

impl Error for AllocError {}

/// Errors from matrix construction and the LU engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatrixError {
    /// The allocator could not provide storage for a matrix.
    Allocation {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
        /// The underlying allocator failure.
        source: AllocError,
    },
    /// `rows * cols` elements do not fit in the address space.
    SizeOverflow {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// Inversion found no usable pivot, so the matrix is not invertible.
    Singular {
        /// Factorization column at which the pivot fell below epsilon.
        column: usize,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allocation { rows, cols, source } => {
                write!(
                    f,
                    "failed to allocate matrix with dimensions rows x columns = {rows} x {cols}: {source}"
                )
            }
            Self::SizeOverflow { rows, cols } => {
                write!(f, "matrix dimensions {rows} x {cols} overflow usize")
            }
            Self::Singular { column } => {
                write!(f, "matrix is not invertible (zero pivot at column {column})")
            }
        }
    }
}

impl Error for MatrixError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Allocation { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl MatrixError {
    /// Whether this error came from storage exhaustion rather than the
    /// numeric content of a matrix.
    pub fn is_allocation(&self) -> bool {
        matches!(self, Self::Allocation { .. } | Self::SizeOverflow { .. })
    }
}
