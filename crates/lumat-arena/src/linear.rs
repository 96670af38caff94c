//! Fixed-capacity bump arena.
//!
//! [`LinearArena`] acquires one contiguous region up front and serves
//! allocations by advancing a cursor through it. Individual blocks are never
//! reclaimed: `deallocate` is a no-op and the region is released once, when
//! the arena is dropped.

use std::alloc::Layout;
use std::cell::Cell;
use std::ptr::NonNull;

use lumat_core::AllocError;

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::raw;
use crate::traits::{Allocator, AllocatorKind};

/// Bump allocator over a fixed-size region.
///
/// Invariant: the cursor never decreases and never exceeds `capacity`.
///
/// ```text
/// region ┌────┬────┬──────────────────────┐
///        │ A1 │ A2 │        free          │
///        └────┴────┴──────────────────────┘
///                  ▲                      ▲
///                cursor               capacity
/// ```
#[derive(Debug)]
pub struct LinearArena {
    region: NonNull<u8>,
    layout: Layout,
    cursor: Cell<usize>,
    config: ArenaConfig,
}

impl LinearArena {
    /// Create an arena, acquiring its whole region from the heap.
    pub fn new(config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        let layout = Layout::from_size_align(config.capacity, config.alignment).map_err(|_| {
            ArenaError::CapacityTooLarge {
                capacity: config.capacity,
            }
        })?;
        let region = raw::alloc_block(layout).ok_or(ArenaError::RegionAllocationFailed {
            capacity: config.capacity,
        })?;
        log::debug!(
            "linear arena created: {} bytes, alignment {}",
            config.capacity,
            config.alignment
        );
        Ok(Self {
            region,
            layout,
            cursor: Cell::new(0),
            config,
        })
    }

    /// Create an arena of `capacity` bytes with the default alignment.
    pub fn with_capacity(capacity: usize) -> Result<Self, ArenaError> {
        Self::new(ArenaConfig::new(capacity))
    }

    /// Bytes handed out so far, including alignment padding.
    pub fn used(&self) -> usize {
        self.cursor.get()
    }

    /// Total size of the region in bytes.
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Bytes still available.
    pub fn remaining(&self) -> usize {
        self.capacity() - self.used()
    }

    /// The configuration this arena was built with.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }
}

// SAFETY: each block is a distinct `[used, end)` slice of the region, which
// is `config.alignment`-aligned and lives until the arena is dropped. The
// cursor only advances and every advance is a multiple of the alignment.
#[allow(unsafe_code)]
unsafe impl Allocator for LinearArena {
    fn allocate(&self, size: usize) -> Result<NonNull<u8>, AllocError> {
        let used = self.cursor.get();
        let capacity = self.config.capacity;
        let aligned = self.config.aligned(size).ok_or(AllocError::InvalidLayout {
            size,
            align: self.config.alignment,
        })?;
        let end = match used.checked_add(aligned) {
            Some(end) if end <= capacity => end,
            _ => {
                log::debug!(
                    "linear arena exhausted: requested {aligned} bytes, {used}/{capacity} in use"
                );
                return Err(AllocError::ArenaExhausted {
                    requested: aligned,
                    used,
                    capacity,
                });
            }
        };
        // SAFETY: `used <= end <= capacity`, so the offset stays within the region.
        #[allow(unsafe_code)]
        let block = unsafe { raw::offset(self.region, used) };
        self.cursor.set(end);
        Ok(block)
    }

    #[allow(unsafe_code)]
    unsafe fn deallocate(&self, _ptr: NonNull<u8>, _size: usize) {}

    fn kind(&self) -> AllocatorKind {
        AllocatorKind::Linear
    }
}

impl Drop for LinearArena {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        // SAFETY: the region came from `alloc_block(self.layout)` in `new`
        // and is released only here.
        unsafe { raw::dealloc_block(self.region, self.layout) }
    }
}
