//! General-purpose heap allocation.

use std::alloc::Layout;
use std::ptr::NonNull;

use lumat_core::AllocError;

use crate::align::WORD_ALIGN;
use crate::raw;
use crate::traits::{Allocator, AllocatorKind};

/// Allocator that delegates to the global heap.
///
/// Every block is released individually by `deallocate`. Exhaustion is
/// reported as [`AllocError::OutOfMemory`]; deciding whether that is fatal
/// is left to the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeapAllocator;

impl HeapAllocator {
    /// Create a heap allocator.
    pub const fn new() -> Self {
        Self
    }

    fn layout(size: usize) -> Result<Layout, AllocError> {
        Layout::from_size_align(size, WORD_ALIGN).map_err(|_| AllocError::InvalidLayout {
            size,
            align: WORD_ALIGN,
        })
    }
}

// SAFETY: blocks come straight from the global allocator with a layout of
// exactly `size` bytes at `WORD_ALIGN`, and each is owned until released.
#[allow(unsafe_code)]
unsafe impl Allocator for HeapAllocator {
    fn allocate(&self, size: usize) -> Result<NonNull<u8>, AllocError> {
        let layout = Self::layout(size)?;
        raw::alloc_block(layout).ok_or(AllocError::OutOfMemory { requested: size })
    }

    #[allow(unsafe_code)]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, size: usize) {
        // `allocate` already accepted this size, so the layout is valid.
        if let Ok(layout) = Self::layout(size) {
            // SAFETY: the caller returns a block from `allocate(size)`.
            unsafe { raw::dealloc_block(ptr, layout) }
        }
    }

    fn kind(&self) -> AllocatorKind {
        AllocatorKind::Standard
    }
}
