//! Test utilities, fixtures, and mock allocators for lumat development.
//!
//! Provides a [`CountingAllocator`] that wraps the heap and records every
//! allocate/deallocate call, reference matrices with known determinants
//! and inverses, and tolerance assertions.

#![deny(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::Cell;
use std::ptr::NonNull;

use lumat_arena::{AllocError, Allocator, AllocatorKind, HeapAllocator};

pub use fixtures::{assert_approx_eq, assert_near_identity, random_matrix};

/// Heap allocator that counts live blocks.
///
/// Useful for checking that every buffer a computation allocates is
/// released again, including on error paths.
#[derive(Debug, Default)]
pub struct CountingAllocator {
    inner: HeapAllocator,
    allocations: Cell<usize>,
    deallocations: Cell<usize>,
    live_bytes: Cell<usize>,
}

impl CountingAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Successful `allocate` calls so far.
    pub fn allocations(&self) -> usize {
        self.allocations.get()
    }

    /// `deallocate` calls so far.
    pub fn deallocations(&self) -> usize {
        self.deallocations.get()
    }

    /// Blocks allocated but not yet released.
    pub fn live_blocks(&self) -> usize {
        self.allocations() - self.deallocations()
    }

    /// Bytes allocated but not yet released.
    pub fn live_bytes(&self) -> usize {
        self.live_bytes.get()
    }
}

// SAFETY: blocks are handed out and released by the wrapped heap allocator.
#[allow(unsafe_code)]
unsafe impl Allocator for CountingAllocator {
    fn allocate(&self, size: usize) -> Result<NonNull<u8>, AllocError> {
        let ptr = self.inner.allocate(size)?;
        self.allocations.set(self.allocations.get() + 1);
        self.live_bytes.set(self.live_bytes.get() + size);
        Ok(ptr)
    }

    #[allow(unsafe_code)]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, size: usize) {
        self.deallocations.set(self.deallocations.get() + 1);
        self.live_bytes.set(self.live_bytes.get() - size);
        // SAFETY: blocks handed out by `allocate` come from `inner`.
        unsafe { self.inner.deallocate(ptr, size) }
    }

    fn kind(&self) -> AllocatorKind {
        self.inner.kind()
    }
}

/// Allocator whose every request fails, for exercising error paths.
#[derive(Debug, Default)]
pub struct FailingAllocator;

// SAFETY: `allocate` never succeeds, so no block is ever handed out.
#[allow(unsafe_code)]
unsafe impl Allocator for FailingAllocator {
    fn allocate(&self, size: usize) -> Result<NonNull<u8>, AllocError> {
        Err(AllocError::OutOfMemory { requested: size })
    }

    #[allow(unsafe_code)]
    unsafe fn deallocate(&self, _ptr: NonNull<u8>, _size: usize) {
        unreachable!("FailingAllocator never hands out blocks");
    }

    fn kind(&self) -> AllocatorKind {
        AllocatorKind::Standard
    }
}
