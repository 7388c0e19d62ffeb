use core::ops::Index;

use super::SortedSet;
use crate::{Error, IntoKey, Key, Rank, Result};

impl SortedSet {
    /// Returns the key at position `index` in sorted order.
    ///
    /// The descent compares `index` with the rank cached in each node, so no
    /// sizes are summed on the way down.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` is negative or not below
    /// [`size`](Self::size), which includes every index into an empty set.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_key_set::{Error, Key, SortedSet};
    ///
    /// let set = SortedSet::try_from_chars("aceFgyz".chars())?;
    /// assert_eq!(set.key_at_index(3)?, Key::new('f')?);
    /// assert_eq!(set.key_at_index(-1), Err(Error::OutOfRange { index: -1, len: 7 }));
    /// # Ok::<(), sorted_key_set::Error>(())
    /// ```
    pub fn key_at_index(&self, index: i64) -> Result<Key> {
        let len = self.len();
        usize::try_from(index)
            .ok()
            .and_then(|rank| self.get_by_rank(rank))
            .copied()
            .ok_or(Error::OutOfRange { index, len })
    }

    /// Returns the position of `key` in sorted order.
    ///
    /// `key` may be a [`Key`] or raw input accepted by [`IntoKey`].
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `key` is neither null nor a single
    ///   alphabetic character.
    /// - [`Error::EmptySet`] if the set is empty.
    /// - [`Error::NotFound`] if the set does not contain `key`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_key_set::{Error, Key, SortedSet};
    ///
    /// let set = SortedSet::try_from_chars("ABCDEFGHIJKLMNOPQRSTVXYZ".chars())?;
    /// assert_eq!(set.get_index('g')?, 6);
    /// assert_eq!(set.get_index('u'), Err(Error::NotFound(Key::new('u')?)));
    /// # Ok::<(), sorted_key_set::Error>(())
    /// ```
    pub fn get_index<K: IntoKey>(&self, key: K) -> Result<usize> {
        let key = key.into_key()?;
        if self.is_empty() {
            return Err(Error::EmptySet);
        }
        self.rank_of(&key).ok_or(Error::NotFound(key))
    }

    /// Returns the key at position `rank` in sorted order, or `None` if
    /// `rank` is out of bounds.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_key_set::{Key, SortedSet};
    ///
    /// let set = SortedSet::from([Key::NULL, Key::new('q')?]);
    /// assert_eq!(set.get_by_rank(0), Some(&Key::NULL));
    /// assert!(set.get_by_rank(2).is_none());
    /// # Ok::<(), sorted_key_set::Error>(())
    /// ```
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<&Key> {
        self.raw.get_by_rank(rank)
    }

    /// Returns the zero-based rank of `key` in sorted order, or `None` if
    /// the key is not present.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn rank_of(&self, key: &Key) -> Option<usize> {
        self.raw.rank_of(key)
    }
}

/// Indexes into the set by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use sorted_key_set::{Key, Rank, SortedSet};
///
/// let set = SortedSet::try_from_chars(['x', 'y', 'z'])?;
/// assert_eq!(set[Rank(1)], Key::new('y')?);
/// # Ok::<(), sorted_key_set::Error>(())
/// ```
impl Index<Rank> for SortedSet {
    type Output = Key;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.get_by_rank(rank.0).expect("index out of bounds")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn empty_set_errors() {
        let set = SortedSet::new();
        assert_eq!(set.key_at_index(0), Err(Error::OutOfRange { index: 0, len: 0 }));
        assert_eq!(set.get_index('a'), Err(Error::EmptySet));
        assert_eq!(set.get_index(None::<char>), Err(Error::EmptySet));
    }

    #[test]
    fn invalid_key_beats_empty_set() {
        let set = SortedSet::new();
        assert!(matches!(set.get_index("no"), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn huge_index_is_out_of_range() {
        let set = SortedSet::try_from_chars(['a']).unwrap();
        assert_eq!(
            set.key_at_index(i64::MAX),
            Err(Error::OutOfRange { index: i64::MAX, len: 1 })
        );
        assert_eq!(
            set.key_at_index(i64::MIN),
            Err(Error::OutOfRange { index: i64::MIN, len: 1 })
        );
    }
}
