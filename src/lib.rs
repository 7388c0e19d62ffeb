//! An immutable, order-statistic set of single-letter keys.
//!
//! This crate provides [`SortedSet`], a persistent sorted set whose elements are
//! [`Key`]s: a case-insensitive ASCII letter or the distinguished null key. In
//! addition to the usual set operations it answers positional queries in
//! O(log n):
//!
//! - [`key_at_index`](SortedSet::key_at_index) - Get the key at a given sorted position
//! - [`get_index`](SortedSet::get_index) - Get the sorted position of a key
//! - Indexing by [`Rank`] - e.g., `set[Rank(0)]` for the first key
//!
//! # Example
//!
//! ```
//! use sorted_key_set::{Key, Rank, SortedSet};
//!
//! let set = SortedSet::try_from_chars(['A', 'e', 'z', 'c', 'F'])?;
//!
//! // Every mutation returns a new set; the old one is untouched.
//! let bigger = set.add(Key::new('b')?);
//! assert_eq!(set.size(), 5);
//! assert_eq!(bigger.size(), 6);
//!
//! // Order-statistic operations (O(log n))
//! assert_eq!(bigger.key_at_index(1)?, Key::new('b')?);
//! assert_eq!(bigger.get_index(&Key::new('z')?)?, 5);
//! assert_eq!(bigger[Rank(0)], Key::new('a')?);
//!
//! let smaller = bigger.remove('E')?;
//! assert!(!smaller.contains(&Key::new('e')?));
//! # Ok::<(), sorted_key_set::Error>(())
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Immutable** - `add` and `remove` build a new tree; published trees are never written
//! - **Cheap clones** - nodes are reference counted, so a clone shares the whole tree
//! - **`serde`** (optional) - serialize keys as `Option<char>` and sets as sequences
//!
//! # Implementation
//!
//! The tree is a binary search tree rebuilt from the sorted key sequence on every
//! mutation. Each subtree root is the median of its slice, which bounds the height
//! at `ceil(log2(n + 1))`. Every node caches its subtree size and its absolute
//! position (rank) in the whole set.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod key;
mod order_statistic;
mod raw;
#[cfg(feature = "serde")]
mod serde_impl;

pub mod sorted_set;

pub use error::{Error, Result};
pub use key::{IntoKey, Key};
pub use order_statistic::Rank;
pub use sorted_set::SortedSet;
