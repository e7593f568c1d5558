//! Fixed-capacity caching with least-recently-used eviction.
//!
//! [`LruCache`] pairs a hash index with an arena-backed doubly-linked
//! recency list: the index gives O(1) lookup from key to list slot, the
//! list gives O(1) promotion on access and O(1) choice of eviction victim.
//! The two are kept in bijection - every cached key has exactly one slot
//! and vice versa - and the entry count never exceeds the capacity fixed
//! at construction.
//!
//! [`CacheStats`] carries the hit/miss counters the cache maintains as it
//! serves lookups.
//!
//! # Examples
//!
//! ```rust
//! use trellis::cache::LruCache;
//!
//! let mut cache: LruCache<&str, u32> = LruCache::new(2);
//! cache.insert("a", 1);
//! cache.insert("b", 2);
//!
//! cache.get(&"a");      // "a" is now most recently used
//! cache.insert("c", 3); // evicts "b", the least recently used
//!
//! assert!(cache.contains(&"a"));
//! assert!(!cache.contains(&"b"));
//! assert!(cache.contains(&"c"));
//! ```

mod lru;
mod stats;

pub use lru::{Iter, LruCache};
pub use stats::CacheStats;
