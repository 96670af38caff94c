//! Tagged union over the built-in allocation strategies.

use std::ptr::NonNull;

use lumat_core::AllocError;

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::heap::HeapAllocator;
use crate::linear::LinearArena;
use crate::traits::{Allocator, AllocatorKind};

/// Either a heap allocator or a linear arena, chosen at runtime.
///
/// Useful when the strategy is a configuration decision: callers hold an
/// `AnyAllocator` (or a `&dyn Allocator` to it) without caring which
/// variant backs their matrices.
#[derive(Debug)]
pub enum AnyAllocator {
    /// General-purpose heap allocation.
    Standard(HeapAllocator),
    /// Fixed-capacity bump arena.
    Linear(LinearArena),
}

impl AnyAllocator {
    /// A heap-backed allocator.
    pub fn standard() -> Self {
        Self::Standard(HeapAllocator::new())
    }

    /// An arena-backed allocator built from `config`.
    pub fn linear(config: ArenaConfig) -> Result<Self, ArenaError> {
        LinearArena::new(config).map(Self::Linear)
    }

    /// The arena behind this allocator, if it is one.
    pub fn as_linear(&self) -> Option<&LinearArena> {
        match self {
            Self::Linear(arena) => Some(arena),
            Self::Standard(_) => None,
        }
    }
}

impl Default for AnyAllocator {
    fn default() -> Self {
        Self::standard()
    }
}

impl From<HeapAllocator> for AnyAllocator {
    fn from(heap: HeapAllocator) -> Self {
        Self::Standard(heap)
    }
}

impl From<LinearArena> for AnyAllocator {
    fn from(arena: LinearArena) -> Self {
        Self::Linear(arena)
    }
}

// SAFETY: every call forwards to a variant that upholds the contract.
#[allow(unsafe_code)]
unsafe impl Allocator for AnyAllocator {
    fn allocate(&self, size: usize) -> Result<NonNull<u8>, AllocError> {
        match self {
            Self::Standard(heap) => heap.allocate(size),
            Self::Linear(arena) => arena.allocate(size),
        }
    }

    #[allow(unsafe_code)]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, size: usize) {
        // SAFETY: forwarded unchanged to the variant that produced the block.
        unsafe {
            match self {
                Self::Standard(heap) => heap.deallocate(ptr, size),
                Self::Linear(arena) => arena.deallocate(ptr, size),
            }
        }
    }

    fn kind(&self) -> AllocatorKind {
        match self {
            Self::Standard(heap) => heap.kind(),
            Self::Linear(arena) => arena.kind(),
        }
    }
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;

    #[test]
    fn standard_variant_releases_blocks() {
        let alloc = AnyAllocator::standard();
        assert_eq!(alloc.kind(), AllocatorKind::Standard);
        assert!(alloc.as_linear().is_none());
        let ptr = alloc.allocate(32).unwrap();
        unsafe { alloc.deallocate(ptr, 32) };
    }

    #[test]
    fn linear_variant_tracks_cursor() {
        let alloc = AnyAllocator::linear(ArenaConfig::new(32)).unwrap();
        assert_eq!(alloc.kind(), AllocatorKind::Linear);
        let ptr = alloc.allocate(10).unwrap();
        unsafe { alloc.deallocate(ptr, 10) };
        assert_eq!(
            alloc.as_linear().unwrap().used(),
            crate::align_up(10, crate::WORD_ALIGN).unwrap()
        );
        assert!(alloc.allocate(24).is_err());
    }

    #[test]
    fn dispatch_through_trait_object() {
        let heap = AnyAllocator::from(HeapAllocator);
        let arena = AnyAllocator::from(LinearArena::with_capacity(8).unwrap());
        let allocators: [&dyn Allocator; 2] = [&heap, &arena];
        for alloc in allocators {
            let ptr = alloc.allocate(8).unwrap();
            unsafe { alloc.deallocate(ptr, 8) };
        }
    }
}
