use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library
/// can potentially return.
///
/// Almost every operation in this crate is total over its documented input
/// domain: lookups for absent values report absence through `Option` or
/// `bool` returns, never through this type. `Error` exists for the small
/// number of genuinely fallible operations - checked construction and export
/// to an external writer.
///
/// Precondition violations (for example constructing an
/// [`LruCache`](crate::LruCache) with capacity zero through the panicking
/// constructor) are programmer errors and abort immediately instead of
/// producing an `Error`; continuing with a corrupted structure would be
/// strictly worse than stopping.
///
/// # Examples
///
/// ```rust
/// use trellis::{Error, LruCache};
///
/// match LruCache::<u32, u32>::try_new(0) {
///     Err(Error::ZeroCapacity) => {}
///     _ => unreachable!(),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A cache was constructed with capacity zero.
    ///
    /// A bounded cache cannot exist in a zero-capacity state: every insert
    /// would have to evict the entry it just created. The checked
    /// [`LruCache::try_new`](crate::LruCache::try_new) constructor reports
    /// this condition; the plain constructor panics on it.
    #[error("cache capacity must be at least 1")]
    ZeroCapacity,

    /// Writer I/O error.
    ///
    /// Wraps standard I/O errors raised by the sink passed to export
    /// operations such as [`Graph::write_dot`](crate::Graph::write_dot).
    /// Nothing inside the structures themselves performs I/O.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
