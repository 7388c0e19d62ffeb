use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cmp::Ordering::{Equal, Greater, Less};
use core::iter::FusedIterator;

use smallvec::SmallVec;

use super::build::build;
use super::node::{Link, Node};
use crate::Key;

// Inline capacity of the iterator stack; a median-built tree of 2^16 - 1 keys
// is 16 levels deep.
const STACK_DEPTH: usize = 16;

/// The tree behind a [`SortedSet`](crate::SortedSet).
///
/// Cloning shares every node with the original.
#[derive(Clone, Debug, Default)]
pub(crate) struct RawTree {
    root: Link,
}

impl RawTree {
    /// Builds a tree from strictly ascending keys.
    pub(crate) fn from_sorted(keys: &[Key]) -> Self {
        Self { root: build(keys) }
    }

    #[inline]
    pub(crate) fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        Node::size_of(self.root())
    }

    pub(crate) fn height(&self) -> usize {
        Node::height_of(self.root())
    }

    /// Returns `true` if both trees are the same allocation (or both empty).
    pub(crate) fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.root, &other.root) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    pub(crate) fn contains(&self, key: &Key) -> bool {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(node.key()) {
                Less => node.left(),
                Greater => node.right(),
                Equal => return true,
            };
        }
        false
    }

    /// Gets a key by its rank, steering by the rank cached in each node.
    pub(crate) fn get_by_rank(&self, rank: usize) -> Option<&Key> {
        if rank >= self.len() {
            return None;
        }

        let mut current = self.root()?;
        loop {
            let next = match rank.cmp(&current.rank()) {
                Equal => return Some(current.key()),
                Less => current.left(),
                Greater => current.right(),
            };
            debug_assert!(
                next.is_some(),
                "get_by_rank: rank invariant violated - rank {} not found below {} (rank {})",
                rank,
                current.key(),
                current.rank()
            );
            current = next?;
        }
    }

    /// Finds the rank of `key` by summing the sizes of the subtrees passed on
    /// the left during the descent.
    pub(crate) fn rank_of(&self, key: &Key) -> Option<usize> {
        let mut current = self.root();
        let mut rank = 0;

        while let Some(node) = current {
            match key.cmp(node.key()) {
                Less => current = node.left(),
                Greater => {
                    rank += Node::size_of(node.left()) + 1;
                    current = node.right();
                }
                Equal => {
                    let rank = rank + Node::size_of(node.left());
                    debug_assert_eq!(rank, node.rank(), "rank_of: cached rank disagrees for {key}");
                    return Some(rank);
                }
            }
        }
        None
    }

    pub(crate) fn first(&self) -> Option<&Key> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(node.key())
    }

    pub(crate) fn last(&self) -> Option<&Key> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(node.key())
    }

    pub(crate) fn iter(&self) -> RawIter<'_> {
        RawIter::new(self.root(), self.len())
    }

    /// Copies the keys out in ascending order.
    pub(crate) fn to_vec(&self) -> Vec<Key> {
        let mut keys = Vec::with_capacity(self.len());
        keys.extend(self.iter().copied());
        keys
    }

    /// Panics if any node breaks the ordering, rank, size or balance invariants.
    #[cfg(test)]
    pub(crate) fn check(&self) {
        let size = self.root().map_or(0, |root| root.check(0, (None, None)));
        assert_eq!(size, self.len());
    }
}

/// In-order traversal over a [`RawTree`].
#[derive(Clone, Debug, Default)]
pub(crate) struct RawIter<'a> {
    // Nodes whose key and right subtree are still to be visited.
    stack: SmallVec<[&'a Node; STACK_DEPTH]>,
    remaining: usize,
}

impl<'a> RawIter<'a> {
    fn new(root: Option<&'a Node>, len: usize) -> Self {
        let mut iter = Self {
            stack: SmallVec::new(),
            remaining: len,
        };
        iter.descend_left(root);
        iter
    }

    fn descend_left(&mut self, mut current: Option<&'a Node>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left();
        }
    }
}

impl<'a> Iterator for RawIter<'a> {
    type Item = &'a Key;

    fn next(&mut self) -> Option<&'a Key> {
        let node = self.stack.pop()?;
        self.descend_left(node.right());
        self.remaining -= 1;
        Some(node.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RawIter<'_> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl FusedIterator for RawIter<'_> {}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::raw::normalize;
    use proptest::prelude::*;

    fn tree(letters: &str) -> RawTree {
        RawTree::from_sorted(&normalize(letters.chars().map(|letter| Key::new(letter).unwrap())))
    }

    #[test]
    fn empty_tree() {
        let tree = RawTree::default();
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.get_by_rank(0), None);
        assert_eq!(tree.rank_of(&Key::NULL), None);
        assert_eq!(tree.first(), None);
        assert_eq!(tree.iter().next(), None);
        assert!(tree.ptr_eq(&RawTree::default()));
    }

    #[test]
    fn clones_share_nodes() {
        let tree = tree("hello");
        let copy = tree.clone();
        assert!(tree.ptr_eq(&copy));
        assert!(!tree.ptr_eq(&self::tree("hello")));
    }

    #[test]
    fn iter_is_exact_size() {
        let tree = tree("qwerty");
        let mut iter = tree.iter();
        assert_eq!(iter.len(), 6);
        iter.next();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.count(), 5);
    }

    proptest! {
        #[test]
        fn lookups_match_sorted_vec(letters in "[a-z]{0,26}", probe in "[a-z]") {
            let tree = tree(&letters);
            tree.check();
            let sorted = tree.to_vec();
            prop_assert!(sorted.windows(2).all(|pair| pair[0] < pair[1]));

            for (rank, key) in sorted.iter().enumerate() {
                prop_assert_eq!(tree.get_by_rank(rank), Some(key));
                prop_assert_eq!(tree.rank_of(key), Some(rank));
                prop_assert!(tree.contains(key));
            }
            prop_assert_eq!(tree.get_by_rank(sorted.len()), None);
            prop_assert_eq!(tree.first(), sorted.first());
            prop_assert_eq!(tree.last(), sorted.last());

            let probe = Key::new(probe.chars().next().unwrap()).unwrap();
            prop_assert_eq!(tree.contains(&probe), sorted.contains(&probe));
            prop_assert_eq!(tree.rank_of(&probe), sorted.binary_search(&probe).ok());
        }
    }
}
