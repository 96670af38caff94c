//! Pluggable allocators backing lumat matrix storage.
//!
//! Every matrix buffer is obtained through the [`Allocator`] trait. Two
//! strategies are provided, plus a tagged union over both:
//!
//! ```text
//! Allocator (trait: allocate / deallocate)
//! ├── HeapAllocator   general-purpose heap, per-block release
//! ├── LinearArena     fixed-capacity bump region, release is a no-op
//! └── AnyAllocator    Standard(HeapAllocator) | Linear(LinearArena)
//! ```
//!
//! # Arena lifetime
//!
//! A [`LinearArena`] owns one contiguous region acquired at construction.
//! Allocations advance a cursor and are never reclaimed individually; the
//! whole region is released when the arena is dropped. Borrowers hold a
//! shared reference to the arena, so the borrow checker keeps every block
//! from outliving the region.
//!
//! # Threading
//!
//! Allocators use unsynchronized interior mutability and are neither
//! `Send` nor `Sync`. Each instance belongs to a single thread of control.
//!
//! # Unsafe code
//!
//! Raw allocation is confined to `raw.rs`; the trait's `deallocate` is
//! `unsafe` because it trusts the caller to return a block it was given.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod align;
pub mod any;
pub mod config;
pub mod error;
pub mod heap;
pub mod linear;
mod raw;
pub mod traits;

// Public re-exports for the primary API surface.
pub use align::{align_up, WORD_ALIGN};
pub use any::AnyAllocator;
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use heap::HeapAllocator;
pub use linear::LinearArena;
pub use lumat_core::AllocError;
pub use traits::{Allocator, AllocatorKind};
