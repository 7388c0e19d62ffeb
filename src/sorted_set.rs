//! The immutable [`SortedSet`] and its iterator.

use alloc::vec::Vec;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;

use tracing::trace;

use crate::raw::{RawIter, RawTree, normalize};
use crate::{Error, IntoKey, Key, Result};

mod order_statistic;

/// An immutable sorted set of [`Key`]s with O(log n) positional access.
///
/// A `SortedSet` is never modified after it is built. [`add`](SortedSet::add)
/// and [`remove`](SortedSet::remove) return a new set and leave the receiver,
/// and every clone of it, exactly as it was. Clones share their nodes, so they
/// are O(1) and may be handed to other threads.
///
/// The tree is rebuilt from the sorted key sequence on every change, always
/// rooting each subtree at the median of its slice. Its height is therefore
/// `ceil(log2(n + 1))` whatever order the keys arrived in.
///
/// # Examples
///
/// ```
/// use sorted_key_set::{Key, SortedSet};
///
/// let letters = SortedSet::try_from_chars(['d', 'A', 'c'])?;
/// let more = letters.add(Key::NULL);
///
/// assert_eq!(letters.keys(), [Key::new('a')?, Key::new('c')?, Key::new('d')?]);
/// assert_eq!(more.first(), Some(&Key::NULL));
/// assert_eq!(more.size(), 4);
/// # Ok::<(), sorted_key_set::Error>(())
/// ```
#[derive(Clone, Default)]
pub struct SortedSet {
    raw: RawTree,
}

/// An iterator over the keys of a `SortedSet` in ascending order.
///
/// This `struct` is created by the [`iter`] method on [`SortedSet`].
///
/// [`iter`]: SortedSet::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug, Default)]
pub struct Iter<'a> {
    inner: RawIter<'a>,
}

impl SortedSet {
    /// Makes a new, empty `SortedSet`.
    #[must_use]
    pub fn new() -> Self {
        Self { raw: RawTree::default() }
    }

    /// Builds a set from already validated keys.
    ///
    /// Keys are sorted with the null key first. Repeated keys collapse into
    /// one, so the result holds each key once.
    ///
    /// # Complexity
    ///
    /// O(n log n)
    pub fn from_keys<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = Key>,
    {
        let keys = normalize(keys);
        trace!(len = keys.len(), "building sorted set");
        Self::from_sorted(&keys)
    }

    /// Builds a set from raw input such as `char`s, `&str`s or `Option`s of
    /// either, validating each one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for the first element that is not
    /// null or a single alphabetic character.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_key_set::{Error, SortedSet};
    ///
    /// let set = SortedSet::try_from_chars([Some("b"), None, Some("A")])?;
    /// assert_eq!(set.size(), 3);
    ///
    /// assert!(matches!(SortedSet::try_from_chars(["ab"]), Err(Error::InvalidArgument(_))));
    /// # Ok::<(), sorted_key_set::Error>(())
    /// ```
    pub fn try_from_chars<I>(raw: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: IntoKey,
    {
        let keys = raw.into_iter().map(IntoKey::into_key).collect::<Result<Vec<_>>>()?;
        Ok(Self::from_keys(keys))
    }

    fn from_sorted(keys: &[Key]) -> Self {
        Self {
            raw: RawTree::from_sorted(keys),
        }
    }

    /// Returns the number of keys in the set.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn size(&self) -> usize {
        self.raw.len()
    }

    /// Returns the number of keys in the set. Same as [`size`](Self::size).
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the set contains no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.len() == 0
    }

    /// Returns `true` if the set contains `key`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn contains(&self, key: &Key) -> bool {
        self.raw.contains(key)
    }

    /// Returns a fresh copy of the keys in ascending order, null key first.
    ///
    /// The vector is a snapshot; it does not track later sets derived from
    /// this one.
    #[must_use]
    pub fn keys(&self) -> Vec<Key> {
        self.raw.to_vec()
    }

    /// Gets an iterator that visits the keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_key_set::{Key, SortedSet};
    ///
    /// let set = SortedSet::try_from_chars(['c', 'a', 'b'])?;
    /// let mut iter = set.iter();
    /// assert_eq!(iter.next(), Some(&Key::new('a')?));
    /// assert_eq!(iter.len(), 2);
    /// # Ok::<(), sorted_key_set::Error>(())
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter { inner: self.raw.iter() }
    }

    /// Returns the smallest key, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Key> {
        self.raw.first()
    }

    /// Returns the largest key, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Key> {
        self.raw.last()
    }

    /// Returns the key stored at the root of the tree: the median of the set,
    /// taking the lower one when the size is even.
    #[must_use]
    pub fn root_key(&self) -> Option<&Key> {
        self.raw.root().map(|root| root.key())
    }

    /// Returns the number of levels in the tree.
    #[must_use]
    pub fn height(&self) -> usize {
        self.raw.height()
    }

    /// Returns `true` if both sets are backed by the same tree.
    ///
    /// A set and its clones are always `ptr_eq`, as is the set returned by
    /// adding a key that was already present.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.raw.ptr_eq(&other.raw)
    }

    /// Returns a set that also contains `key`.
    ///
    /// If `key` is already present the result shares this set's tree.
    /// Otherwise the tree is rebuilt from the enlarged key sequence.
    ///
    /// # Complexity
    ///
    /// O(log n) when present, O(n) otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_key_set::{Key, SortedSet};
    ///
    /// let set = SortedSet::try_from_chars(['a'])?;
    /// let bigger = set.add(Key::new('b')?);
    ///
    /// assert_eq!(set.size(), 1);
    /// assert_eq!(bigger.size(), 2);
    /// assert!(bigger.add(Key::new('B')?).ptr_eq(&bigger));
    /// # Ok::<(), sorted_key_set::Error>(())
    /// ```
    #[must_use]
    pub fn add(&self, key: Key) -> Self {
        if self.contains(&key) {
            trace!(%key, "add: key already present");
            return self.clone();
        }

        let mut keys = self.keys();
        let at = keys.partition_point(|existing| *existing < key);
        keys.insert(at, key);
        trace!(%key, rank = at, len = keys.len(), "add: rebuilding");
        Self::from_sorted(&keys)
    }

    /// Returns a set without `key`.
    ///
    /// A key that is not present leaves the membership unchanged and the
    /// result shares this set's tree. A set of exactly one key always yields
    /// the empty set, whichever key is given.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `key` is neither null nor a single
    ///   alphabetic character.
    /// - [`Error::EmptySet`] if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_key_set::{Error, SortedSet};
    ///
    /// let set = SortedSet::try_from_chars("abcdefghijk".chars())?;
    /// let smaller = set.remove('J')?;
    ///
    /// assert_eq!(smaller.size(), 10);
    /// assert_eq!(set.size(), 11);
    /// assert!(matches!(set.remove("jk"), Err(Error::InvalidArgument(_))));
    /// # Ok::<(), sorted_key_set::Error>(())
    /// ```
    pub fn remove<K: IntoKey>(&self, key: K) -> Result<Self> {
        let key = key.into_key()?;
        match self.size() {
            0 => return Err(Error::EmptySet),
            1 => {
                trace!(%key, "remove: emptying singleton set");
                return Ok(Self::new());
            }
            _ => {}
        }

        let Some(rank) = self.raw.rank_of(&key) else {
            trace!(%key, "remove: key absent");
            return Ok(self.clone());
        };

        let mut keys = self.keys();
        keys.remove(rank);
        trace!(%key, rank, len = keys.len(), "remove: rebuilding");
        Ok(Self::from_sorted(&keys))
    }

    #[cfg(test)]
    pub(crate) fn check(&self) {
        self.raw.check();
    }
}

impl fmt::Debug for SortedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl PartialEq for SortedSet {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || (self.len() == other.len() && self.iter().eq(other.iter()))
    }
}

impl Eq for SortedSet {}

impl Hash for SortedSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for key in self {
            key.hash(state);
        }
    }
}

impl FromIterator<Key> for SortedSet {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Self::from_keys(iter)
    }
}

impl<const N: usize> From<[Key; N]> for SortedSet {
    /// Converts a `[Key; N]` into a `SortedSet`.
    ///
    /// ```
    /// use sorted_key_set::{Key, SortedSet};
    ///
    /// let set = SortedSet::from([Key::NULL]);
    /// assert_eq!(set.root_key(), Some(&Key::NULL));
    /// ```
    fn from(keys: [Key; N]) -> Self {
        Self::from_keys(keys)
    }
}

impl<'a> IntoIterator for &'a SortedSet {
    type Item = &'a Key;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Key;

    fn next(&mut self) -> Option<&'a Key> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl FusedIterator for Iter<'_> {}
