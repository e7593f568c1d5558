//! Self-balancing binary search trees.
//!
//! This module provides [`AvlTree`], a sorted set of distinct values that
//! keeps itself within the AVL height bound by rotating subtrees whenever an
//! insert or removal leaves a node with a height imbalance greater than one.
//!
//! # Guarantees
//!
//! - `insert`, `remove`, `contains`, `get`, `min` and `max` are O(log n)
//! - in-order iteration yields a strictly ascending sequence
//! - after any completed mutation, every node's left and right subtree
//!   heights differ by at most one
//!
//! # Traversal Orders
//!
//! The [`Traversal`] enum names the four supported orders. In-order is
//! available as a lazy iterator ([`AvlTree::iter`]); the remaining orders
//! require a full walk anyway and are returned as collected vectors.
//!
//! # Examples
//!
//! ```rust
//! use trellis::tree::AvlTree;
//!
//! let tree: AvlTree<i32> = (1..=100).collect();
//! assert_eq!(tree.len(), 100);
//! assert!(tree.height() <= 8); // balanced despite the ascending insert order
//! assert_eq!(tree.min(), Some(&1));
//! assert_eq!(tree.max(), Some(&100));
//! ```

mod avl;
mod iter;

pub use avl::AvlTree;
pub use iter::{InOrderIter, Traversal};
