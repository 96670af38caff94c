//! The allocation capability shared by every storage strategy.

use std::fmt;
use std::ptr::NonNull;

use lumat_core::AllocError;

/// Which strategy an allocator implements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AllocatorKind {
    /// General-purpose heap allocation.
    Standard,
    /// Fixed-capacity bump arena.
    Linear,
}

impl fmt::Display for AllocatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Linear => write!(f, "linear"),
        }
    }
}

/// Source of raw storage for matrix buffers.
///
/// Matrices hold a `&dyn Allocator` and return their buffer through it when
/// dropped. Implementations use `&self` so that several live matrices can
/// share one allocator; any bookkeeping lives behind interior mutability.
///
/// # Safety
///
/// Matrices write to and hand out slices over every block this trait
/// returns, without further checks. An implementation must guarantee that
/// a successful `allocate(size)` returns a block that
///
/// * is valid for reads and writes of `size` bytes,
/// * is aligned to at least `align_of::<f64>()`, and
/// * does not overlap any other block still live from this allocator
///   until it is passed to [`deallocate`](Self::deallocate) (or, for
///   arenas, until the allocator itself is dropped).
///
/// Implementing the trait therefore requires `unsafe impl`:
///
/// ```compile_fail
/// use std::ptr::NonNull;
/// use lumat_arena::{AllocError, Allocator, AllocatorKind};
///
/// struct Dangling;
///
/// impl Allocator for Dangling {
///     fn allocate(&self, _size: usize) -> Result<NonNull<u8>, AllocError> {
///         Ok(NonNull::dangling())
///     }
///     unsafe fn deallocate(&self, _ptr: NonNull<u8>, _size: usize) {}
///     fn kind(&self) -> AllocatorKind {
///         AllocatorKind::Standard
///     }
/// }
/// ```
#[allow(unsafe_code)]
pub unsafe trait Allocator {
    /// Allocate a block of at least `size` bytes.
    ///
    /// The returned pointer is aligned for `f64`; the built-in allocators
    /// align to [`WORD_ALIGN`](crate::WORD_ALIGN).
    /// The contents of the block are unspecified.
    fn allocate(&self, size: usize) -> Result<NonNull<u8>, AllocError>;

    /// Release a block previously returned by [`allocate`](Self::allocate).
    ///
    /// Arena-backed allocators treat this as a no-op.
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by `allocate(size)` on this same
    /// allocator instance, with the same `size`, and must not have been
    /// released already. The block must not be accessed afterwards.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, size: usize);

    /// The strategy this allocator implements.
    fn kind(&self) -> AllocatorKind;
}
