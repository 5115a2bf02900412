//! Identifier range validation.

use core::ops::Range;

/// The dense identifier domain `[OFFSET, OFFSET + RANGE)` of a dispatch table.
///
/// `IdRange` is a zero-sized marker: every check is either a `const fn` or a
/// build-time assertion, so it adds nothing to the hot path.
///
/// # Build-time checks
///
/// [`IdRange::slot_of`] refuses to compile for ids outside the range:
///
/// ```rust,compile_fail
/// use vecta_core::IdRange;
///
/// // Valid ids are 10, 11 and 12.
/// let _ = IdRange::<3, 10>::slot_of::<13>();
/// ```
///
/// and [`IdRange::validate`] refuses an empty range:
///
/// ```rust,compile_fail
/// use vecta_core::IdRange;
///
/// IdRange::<0, 4>::validate();
/// ```
///
/// or one whose end does not fit in `usize`:
///
/// ```rust,compile_fail
/// use vecta_core::IdRange;
///
/// IdRange::<2, { usize::MAX }>::validate();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdRange<const RANGE: usize, const OFFSET: usize = 0>;

impl<const RANGE: usize, const OFFSET: usize> IdRange<RANGE, OFFSET> {
    /// Lowest valid identifier.
    pub const START: usize = OFFSET;

    /// One past the highest valid identifier.
    pub const END: usize = OFFSET + RANGE;

    /// Number of valid identifiers.
    pub const LEN: usize = RANGE;

    /// Assert at build time that the range is usable.
    ///
    /// Rejects an empty range and one whose end overflows `usize`.
    #[inline(always)]
    pub const fn validate() {
        const {
            assert!(RANGE > 0, "dispatch range must not be empty");
            assert!(
                OFFSET.checked_add(RANGE).is_some(),
                "dispatch range overflows usize"
            );
        }
    }

    /// Map a compile-time id to its table slot, failing the build when the id
    /// is out of range.
    #[inline(always)]
    pub const fn slot_of<const ID: usize>() -> usize {
        Self::validate();
        const {
            assert!(
                ID >= OFFSET && ID - OFFSET < RANGE,
                "callback id out of range"
            );
        }
        ID - OFFSET
    }

    /// Whether `id` lies in the range.
    #[inline]
    pub const fn contains(id: usize) -> bool {
        id >= OFFSET && id - OFFSET < RANGE
    }

    /// Map a runtime id to its table slot.
    #[inline]
    pub const fn index_of(id: usize) -> Option<usize> {
        if Self::contains(id) {
            Some(id - OFFSET)
        } else {
            None
        }
    }

    /// Map a table slot back to its id.
    #[inline]
    pub const fn id_at(index: usize) -> Option<usize> {
        if index < RANGE {
            Some(index + OFFSET)
        } else {
            None
        }
    }

    /// The range as a standard `Range`.
    pub const fn bounds() -> Range<usize> {
        OFFSET..OFFSET + RANGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Ids = IdRange<3, 10>;

    #[test]
    fn test_bounds() {
        assert_eq!(Ids::START, 10);
        assert_eq!(Ids::END, 13);
        assert_eq!(Ids::LEN, 3);
        assert_eq!(Ids::bounds(), 10..13);
    }

    #[test]
    fn test_contains_is_half_open() {
        assert!(!Ids::contains(9));
        assert!(Ids::contains(10));
        assert!(Ids::contains(12));
        assert!(!Ids::contains(13));
        assert!(!Ids::contains(0));
        assert!(!Ids::contains(usize::MAX));
    }

    #[test]
    fn test_index_mapping() {
        assert_eq!(Ids::index_of(10), Some(0));
        assert_eq!(Ids::index_of(12), Some(2));
        assert_eq!(Ids::index_of(13), None);
        assert_eq!(Ids::id_at(1), Some(11));
        assert_eq!(Ids::id_at(3), None);
    }

    #[test]
    fn test_const_slot() {
        assert_eq!(Ids::slot_of::<10>(), 0);
        assert_eq!(Ids::slot_of::<12>(), 2);
        assert_eq!(IdRange::<4>::slot_of::<0>(), 0);
    }

    #[test]
    fn test_range_ending_at_max() {
        type Top = IdRange<1, { usize::MAX - 1 }>;
        Top::validate();
        assert!(Top::contains(usize::MAX - 1));
        assert!(!Top::contains(usize::MAX));
    }
}
