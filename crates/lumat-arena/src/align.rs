//! Word alignment helpers.

use std::mem;

/// Alignment applied to every block handed out by the allocators.
///
/// Pointer size, raised to the alignment of `f64` on targets where that is
/// larger, so that any block can hold matrix elements.
pub const WORD_ALIGN: usize = if mem::size_of::<*const ()>() > mem::align_of::<f64>() {
    mem::size_of::<*const ()>()
} else {
    mem::align_of::<f64>()
};

/// Round `size` up to the next multiple of `alignment`.
///
/// `alignment` must be a power of two. Returns `None` if the rounded value
/// does not fit in `usize`.
///
/// ```
/// use lumat_arena::align_up;
///
/// assert_eq!(align_up(13, 8), Some(16));
/// assert_eq!(align_up(16, 8), Some(16));
/// assert_eq!(align_up(0, 8), Some(0));
/// assert_eq!(align_up(usize::MAX, 8), None);
/// ```
pub const fn align_up(size: usize, alignment: usize) -> Option<usize> {
    debug_assert!(alignment.is_power_of_two());
    match size.checked_add(alignment - 1) {
        Some(padded) => Some(padded & !(alignment - 1)),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_align_is_at_least_pointer_size() {
        assert!(WORD_ALIGN >= mem::size_of::<usize>());
        assert!(WORD_ALIGN >= mem::align_of::<f64>());
        assert!(WORD_ALIGN.is_power_of_two());
    }

    #[test]
    fn align_up_rounds_every_size_in_a_word() {
        for i in 0..10 {
            let sizes = (WORD_ALIGN * i + 1)..=(WORD_ALIGN * (i + 1));
            let expected = WORD_ALIGN * (i + 1);
            for size in sizes {
                assert_eq!(align_up(size, WORD_ALIGN), Some(expected));
            }
        }
    }

    #[test]
    fn align_up_overflow_is_none() {
        assert_eq!(align_up(usize::MAX - 2, 8), None);
    }
}
