//! Arena setup error types.
//!
//! Failures of individual allocations are reported as
//! [`AllocError`](lumat_core::AllocError); the errors here cover building
//! the arena itself.

use std::error::Error;
use std::fmt;

/// Errors that can occur while constructing an arena.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// Alignment is zero, not a power of two, or too small for `f64`.
    InvalidAlignment {
        /// The rejected alignment.
        alignment: usize,
    },
    /// Capacity cannot be described by a valid allocation layout.
    CapacityTooLarge {
        /// The rejected capacity in bytes.
        capacity: usize,
    },
    /// The heap could not provide the arena's backing region.
    RegionAllocationFailed {
        /// Requested capacity in bytes.
        capacity: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAlignment { alignment } => {
                write!(
                    f,
                    "invalid arena alignment {alignment}: must be a power of two no smaller than {}",
                    std::mem::align_of::<f64>()
                )
            }
            Self::CapacityTooLarge { capacity } => {
                write!(f, "arena capacity {capacity} bytes exceeds the layout limit")
            }
            Self::RegionAllocationFailed { capacity } => {
                write!(f, "failed to allocate {capacity} bytes for linear arena")
            }
        }
    }
}

impl Error for ArenaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_rejected_value() {
        let err = ArenaError::InvalidAlignment { alignment: 12 };
        assert!(err.to_string().contains("alignment 12"));

        let err = ArenaError::RegionAllocationFailed { capacity: 4096 };
        assert_eq!(
            err.to_string(),
            "failed to allocate 4096 bytes for linear arena"
        );
    }
}
