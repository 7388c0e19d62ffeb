use alloc::sync::Arc;

use super::size::Size;
use crate::Key;

/// An owned link to a child subtree. Subtrees are shared between tree values
/// and are never written after construction.
pub(crate) type Link = Option<Arc<Node>>;

// Binary search tree node, immutable once built.
#[derive(Debug)]
pub(crate) struct Node {
    key: Key,
    // Zero-based position of `key` in the whole set this node belongs to.
    rank: usize,
    // Number of nodes in the subtree rooted here, including this one.
    size: Size,
    left: Link,
    right: Link,
}

impl Node {
    /// Creates a node, deriving its subtree size from its children.
    pub(crate) fn new(key: Key, rank: usize, left: Link, right: Link) -> Self {
        let size = Size::from_children(Self::size_of(left.as_deref()), Self::size_of(right.as_deref()));
        Self {
            key,
            rank,
            size,
            left,
            right,
        }
    }

    #[inline]
    pub(crate) fn key(&self) -> &Key {
        &self.key
    }

    #[inline]
    pub(crate) fn rank(&self) -> usize {
        self.rank
    }

    /// Returns the number of keys in this subtree.
    #[inline]
    pub(crate) fn size(&self) -> usize {
        self.size.to_usize()
    }

    #[inline]
    pub(crate) fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    #[inline]
    pub(crate) fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Size of an optional subtree; an absent subtree is empty.
    #[inline]
    pub(crate) fn size_of(node: Option<&Node>) -> usize {
        node.map_or(0, Node::size)
    }

    /// Number of levels in an optional subtree.
    pub(crate) fn height_of(node: Option<&Node>) -> usize {
        node.map_or(0, |node| 1 + Self::height_of(node.left()).max(Self::height_of(node.right())))
    }

    /// Walks the subtree and panics on the first broken invariant.
    ///
    /// `offset` is the rank of the subtree's smallest key and `bounds` the
    /// exclusive key range its keys must fall in. Returns the subtree size.
    #[cfg(test)]
    pub(crate) fn check(&self, offset: usize, bounds: (Option<Key>, Option<Key>)) -> usize {
        let (lower, upper) = bounds;
        if let Some(lower) = lower {
            assert!(lower < self.key, "key {} not above {}", self.key, lower);
        }
        if let Some(upper) = upper {
            assert!(self.key < upper, "key {} not below {}", self.key, upper);
        }

        let left = self.left().map_or(0, |left| left.check(offset, (lower, Some(self.key))));
        assert_eq!(self.rank, offset + left, "rank of {}", self.key);
        let right = self.right().map_or(0, |right| right.check(self.rank + 1, (Some(self.key), upper)));
        assert_eq!(self.size(), left + right + 1, "size of {}", self.key);

        // Median split keeps the halves within one node of each other.
        assert!(left.abs_diff(right) <= 1, "unbalanced at {}: {left} vs {right}", self.key);
        self.size()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn leaf(letter: char, rank: usize) -> Link {
        Some(Arc::new(Node::new(Key::new(letter).unwrap(), rank, None, None)))
    }

    #[test]
    fn size_counts_children() {
        let node = Node::new(Key::new('b').unwrap(), 1, leaf('a', 0), leaf('c', 2));
        assert_eq!(node.size(), 3);
        assert_eq!(node.left().map(Node::size), Some(1));
        assert_eq!(Node::size_of(None), 0);
        assert_eq!(Node::height_of(Some(&node)), 2);
        assert_eq!(node.check(0, (None, None)), 3);
    }

    #[test]
    #[should_panic(expected = "rank of b")]
    fn check_catches_bad_rank() {
        let node = Node::new(Key::new('b').unwrap(), 0, leaf('a', 0), None);
        node.check(0, (None, None));
    }

    #[test]
    #[should_panic(expected = "not below")]
    fn check_catches_bad_order() {
        let node = Node::new(Key::new('b').unwrap(), 1, leaf('z', 0), None);
        node.check(0, (None, None));
    }
}
