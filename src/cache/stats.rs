//! Cache access statistics.

use std::fmt;

/// Hit and miss counters for a cache instance.
///
/// Counters accumulate across [`get`](crate::LruCache::get) calls and reset
/// together with the cache contents on [`clear`](crate::LruCache::clear).
///
/// # Examples
///
/// ```rust
/// use trellis::cache::LruCache;
///
/// let mut cache: LruCache<&str, u32> = LruCache::new(4);
/// cache.insert("a", 1);
/// cache.get(&"a");
/// cache.get(&"b");
///
/// let stats = cache.stats();
/// assert_eq!(stats.hits, 1);
/// assert_eq!(stats.misses, 1);
/// assert_eq!(stats.hit_rate(), 50.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of lookups that found their key.
    pub hits: u64,
    /// Number of lookups that missed.
    pub misses: u64,
}

impl CacheStats {
    /// Hit rate as a percentage (0.0 to 100.0); 0.0 before any lookup.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }

    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub(crate) fn reset(&mut self) {
        *self = CacheStats::default();
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hits={}, misses={}, hit_rate={:.1}%",
            self.hits,
            self.misses,
            self.hit_rate()
        )
    }
}
