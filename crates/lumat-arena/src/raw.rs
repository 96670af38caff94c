//! Low-level primitives for raw memory operations.
//!
//! The only place in this crate that calls into `std::alloc`. Every
//! function here has a `// SAFETY:` justification at the call site.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::ptr::{self, NonNull};

/// A well-aligned, non-null pointer for zero-sized blocks.
fn dangling(align: usize) -> NonNull<u8> {
    // Layout alignment is never zero.
    NonNull::new(ptr::without_provenance_mut(align)).unwrap_or(NonNull::dangling())
}

/// Allocate a block for `layout`, or `None` if the heap is exhausted.
pub(crate) fn alloc_block(layout: Layout) -> Option<NonNull<u8>> {
    if layout.size() == 0 {
        return Some(dangling(layout.align()));
    }
    // SAFETY: the layout has a non-zero size, checked above.
    let ptr = unsafe { alloc::alloc(layout) };
    NonNull::new(ptr)
}

/// Release a block obtained from [`alloc_block`] with the same layout.
///
/// # Safety
///
/// `ptr` must come from `alloc_block(layout)` and not be released twice.
pub(crate) unsafe fn dealloc_block(ptr: NonNull<u8>, layout: Layout) {
    if layout.size() == 0 {
        return;
    }
    // SAFETY: guaranteed by the caller; zero-sized blocks never reach here.
    unsafe { alloc::dealloc(ptr.as_ptr(), layout) }
}

/// Pointer `offset` bytes past `base`.
///
/// # Safety
///
/// `offset` must not exceed the size of the block starting at `base`.
pub(crate) unsafe fn offset(base: NonNull<u8>, offset: usize) -> NonNull<u8> {
    // SAFETY: guaranteed by the caller.
    unsafe { base.add(offset) }
}
