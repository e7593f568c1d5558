// Copyright 2025 The trellis contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # trellis
//!
//! In-memory data structures with explicit invariant maintenance: a
//! self-balancing AVL search tree, an adjacency-list graph with the classic
//! traversal and shortest-path algorithms, and a fixed-capacity LRU cache
//! with O(1) access and eviction.
//!
//! ## Features
//!
//! - **Balanced search tree** - [`AvlTree`] keeps any sequence of inserts and
//!   removals within the AVL height bound via rotation-based rebalancing
//! - **Graphs** - [`Graph`] over arbitrary hashable vertex values, directed or
//!   undirected, with BFS/DFS, unweighted and weighted shortest paths, cycle
//!   detection and topological ordering
//! - **LRU caching** - [`LruCache`] combines a hash index with an
//!   arena-backed intrusive list for O(1) lookup, promotion and eviction
//! - **No runtime baggage** - single-threaded, synchronous, allocation-only;
//!   there is no I/O, no background work and no internal locking
//!
//! ## Quick Start
//!
//! ```rust
//! use trellis::prelude::*;
//!
//! let mut tree = AvlTree::new();
//! for value in [3, 1, 4, 1, 5] {
//!     tree.insert(value);
//! }
//! assert_eq!(tree.len(), 4); // duplicate 1 was ignored
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 3, 4, 5]);
//! ```
//!
//! ## Architecture
//!
//! `trellis` is organized into three independent subsystems that share only a
//! design philosophy (amortized O(1) or O(log n) contracts, invariants
//! restored before any public method returns):
//!
//! - [`tree`] - the AVL tree and its traversal orders
//! - [`graph`] - the adjacency-list graph and its algorithms
//! - [`cache`] - the LRU cache and its access statistics
//!
//! None of the three calls into another; each can be used on its own.
//!
//! ## Error Handling
//!
//! Absence is not an error: lookups for missing values, vertices or keys
//! return `Option`/`bool` results. The [`Error`] enum covers the few genuinely
//! fallible operations (checked construction, DOT export to a writer), and
//! precondition violations such as a zero cache capacity are programmer
//! errors that panic rather than limp on in a corrupted state:
//!
//! ```rust
//! use trellis::{Error, LruCache};
//!
//! match LruCache::<&str, u32>::try_new(0) {
//!     Err(Error::ZeroCapacity) => {} // rejected up front
//!     _ => unreachable!(),
//! }
//! ```
//!
//! ## Concurrency
//!
//! Structures are plain mutable values with no internal synchronization.
//! Share-nothing usage across threads is fine; sharing a single instance
//! requires external locking, exactly as with the standard library
//! collections.

pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// This module provides a curated selection of the most frequently used types
/// from across the library, allowing for convenient glob imports.
///
/// # Example
///
/// ```rust
/// use trellis::prelude::*;
///
/// let mut graph: Graph<&str> = Graph::directed();
/// graph.add_edge("a", "b");
/// assert_eq!(graph.vertex_count(), 2);
/// ```
pub mod prelude;

/// Fixed-capacity caching with least-recently-used eviction.
///
/// The central type is [`cache::LruCache`], a hash index combined with an
/// arena-backed doubly-linked recency list. All operations except `clear`
/// and iteration are O(1). [`cache::CacheStats`] exposes hit/miss counters.
pub mod cache;

/// Adjacency-list graphs over hashable vertex values.
///
/// [`graph::Graph`] stores a mapping from each vertex to its outgoing
/// [`graph::Edge`] list and supports directed and undirected interpretation,
/// parallel edges, BFS/DFS with early-stop visitors, unweighted and
/// Dijkstra shortest paths, cycle detection, topological ordering and
/// Graphviz/DOT export.
pub mod graph;

/// Self-balancing binary search trees.
///
/// [`tree::AvlTree`] maintains a sorted set of distinct values under the AVL
/// balance invariant; every mutation rebalances the path it touched, keeping
/// lookups, inserts and removals at O(log n). The [`tree::Traversal`] enum
/// selects between the four traversal orders.
pub mod tree;

/// `trellis` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is
/// always [`Error`]. Used consistently throughout the crate for the small set
/// of fallible operations.
pub type Result<T> = std::result::Result<T, Error>;

/// `trellis` Error type
///
/// The error type for checked construction and export operations. See the
/// crate-level docs for the split between errors, absence and preconditions.
pub use error::Error;

/// A sorted set of distinct values under the AVL balance invariant.
///
/// See [`tree::AvlTree`] for the full API.
pub use tree::AvlTree;

/// An adjacency-list graph over hashable vertex values.
///
/// See [`graph::Graph`] for the full API.
pub use graph::Graph;

/// A fixed-capacity cache with least-recently-used eviction.
///
/// See [`cache::LruCache`] for the full API.
pub use cache::LruCache;
