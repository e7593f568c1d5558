//! # trellis Prelude
//!
//! This module provides a convenient prelude for the most commonly used types
//! from the library. Import it to get quick access to the three structures,
//! their companion types and the crate's error handling in one line.
//!
//! # Example
//!
//! ```rust
//! use trellis::prelude::*;
//!
//! let mut cache: LruCache<&str, u32> = LruCache::new(2);
//! cache.insert("a", 1);
//! cache.insert("b", 2);
//! cache.insert("c", 3); // evicts "a"
//! assert!(!cache.contains(&"a"));
//! ```

pub use crate::cache::{CacheStats, LruCache};
pub use crate::graph::{Edge, Graph, GraphKind, ShortestPath};
pub use crate::tree::{AvlTree, Traversal};
pub use crate::{Error, Result};
