use core::num::NonZero;

/// Number of nodes in a subtree, counting its root.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Size(NonZero<usize>);

impl Size {
    /// Size of a subtree whose root has children of the given sizes.
    #[inline]
    pub(crate) fn from_children(left: usize, right: usize) -> Self {
        let total = left.checked_add(right).and_then(|sum| sum.checked_add(1)).and_then(NonZero::new);
        Self(total.expect("`Size::from_children()` - subtree size overflows `usize`!"))
    }

    #[inline]
    pub(crate) const fn to_usize(self) -> usize {
        self.0.get()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use static_assertions::assert_eq_size;

    // Verify our assumptions about `Size` and the niche optimization.
    assert_eq_size!(Size, Option<Size>);
    assert_eq_size!(Size, usize);

    #[test]
    fn leaf_is_one() {
        assert_eq!(Size::from_children(0, 0).to_usize(), 1);
    }

    #[test]
    #[should_panic(expected = "`Size::from_children()` - subtree size overflows `usize`!")]
    fn overflowing_size() {
        let _ = Size::from_children(usize::MAX, 0);
    }

    proptest! {
        #[test]
        fn size_counts_root(left in 0..=usize::MAX / 4, right in 0..=usize::MAX / 4) {
            prop_assert_eq!(Size::from_children(left, right).to_usize(), left + right + 1);
        }
    }
}
