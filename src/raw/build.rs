use alloc::sync::Arc;
use alloc::vec::Vec;

use super::node::{Link, Node};
use crate::Key;

/// Sorts `keys` null-first and drops duplicates.
pub(crate) fn normalize<I>(keys: I) -> Vec<Key>
where
    I: IntoIterator<Item = Key>,
{
    let mut keys: Vec<Key> = keys.into_iter().collect();
    keys.sort_unstable();
    keys.dedup();
    keys
}

/// Builds a balanced tree from strictly ascending `keys`.
///
/// Each subtree root is the key at `(len - 1) / 2` of its slice, and its rank
/// is that position offset by where the slice starts in the whole sequence.
pub(crate) fn build(keys: &[Key]) -> Link {
    debug_assert!(keys.is_sorted(), "`build()` - `keys` must be sorted!");
    build_slice(keys, 0)
}

fn build_slice(keys: &[Key], offset: usize) -> Link {
    if keys.is_empty() {
        return None;
    }

    let mid = (keys.len() - 1) / 2;
    let (left, rest) = keys.split_at(mid);
    let (key, right) = rest.split_first()?;
    let rank = offset + mid;

    let left = build_slice(left, offset);
    let right = build_slice(right, rank + 1);
    Some(Arc::new(Node::new(*key, rank, left, right)))
}
