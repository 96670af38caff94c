//! Arena configuration parameters.

use crate::align::WORD_ALIGN;
use crate::error::ArenaError;

/// Configuration for a [`LinearArena`](crate::LinearArena).
///
/// Validated at construction; all values are immutable after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Size of the arena region in bytes.
    ///
    /// Default: 4096.
    pub capacity: usize,

    /// Alignment of every block handed out, in bytes.
    ///
    /// Default: [`WORD_ALIGN`]. Must be a power of two and at least the
    /// alignment of `f64`.
    pub alignment: usize,
}

impl ArenaConfig {
    /// Default region size in bytes.
    pub const DEFAULT_CAPACITY: usize = 4096;

    /// Create a new arena config with the given capacity and word alignment.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            alignment: WORD_ALIGN,
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if !self.alignment.is_power_of_two() || self.alignment < std::mem::align_of::<f64>() {
            return Err(ArenaError::InvalidAlignment {
                alignment: self.alignment,
            });
        }
        // Mirrors the `Layout` limit: the rounded size must fit in `isize`.
        if self.capacity > isize::MAX as usize - (self.alignment - 1) {
            return Err(ArenaError::CapacityTooLarge {
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    /// Round a request up to this config's alignment.
    pub fn aligned(&self, size: usize) -> Option<usize> {
        crate::align::align_up(size, self.alignment)
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity_is_one_page() {
        let config = ArenaConfig::default();
        assert_eq!(config.capacity, 4096);
        assert_eq!(config.alignment, WORD_ALIGN);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_alignment_rejected() {
        let config = ArenaConfig {
            capacity: 64,
            alignment: 0,
        };
        assert_eq!(
            config.validate(),
            Err(ArenaError::InvalidAlignment { alignment: 0 })
        );
    }

    #[test]
    fn non_power_of_two_alignment_rejected() {
        let config = ArenaConfig {
            capacity: 64,
            alignment: 12,
        };
        assert!(matches!(
            config.validate(),
            Err(ArenaError::InvalidAlignment { alignment: 12 })
        ));
    }

    #[test]
    fn alignment_below_f64_rejected() {
        let config = ArenaConfig {
            capacity: 64,
            alignment: 2,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn oversized_capacity_rejected() {
        let config = ArenaConfig::new(usize::MAX);
        assert_eq!(
            config.validate(),
            Err(ArenaError::CapacityTooLarge {
                capacity: usize::MAX
            })
        );
    }

    #[test]
    fn aligned_rounds_up() {
        let config = ArenaConfig {
            capacity: 16,
            alignment: 8,
        };
        assert_eq!(config.aligned(1), Some(8));
        assert_eq!(config.aligned(8), Some(8));
        assert_eq!(config.aligned(9), Some(16));
    }
}
