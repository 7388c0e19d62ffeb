/// A zero-based rank into the sorted order of a set.
///
/// Indexing a [`SortedSet`](crate::SortedSet) by `Rank` panics when the rank is
/// out of bounds; use [`key_at_index`](crate::SortedSet::key_at_index) or
/// [`get_by_rank`](crate::SortedSet::get_by_rank) for a fallible lookup.
///
/// # Examples
///
/// ```
/// use sorted_key_set::{Key, Rank, SortedSet};
///
/// let set = SortedSet::try_from_chars(['b', 'a'])?;
///
/// assert_eq!(set[Rank(0)], Key::new('a')?);
/// # Ok::<(), sorted_key_set::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
