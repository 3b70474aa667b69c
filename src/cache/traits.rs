//! Cache Capability Contracts
//!
//! Two narrow contracts rather than one wide interface: [`Cache`] for
//! immediate, non-suspending use and [`AsyncCache`] for callers prepared
//! to suspend on a (possibly remote) backend round-trip.
//! [`KeyValueBackend`] is the minimal shape assumed of an injected
//! external store client.

use async_trait::async_trait;

use crate::error::Result;

// == Synchronous Capability ==
/// Synchronous cache over an arbitrary payload type.
///
/// All operations complete immediately. The contract is fallible so that
/// backend-backed implementations can share it; the in-memory
/// implementation never returns an error.
pub trait Cache<T> {
    /// Retrieves the value stored under `key`, if any.
    fn get(&mut self, key: &str) -> Result<Option<T>>;

    /// Stores `value` under `key`, overwriting unconditionally.
    fn set(&mut self, key: &str, value: T) -> Result<()>;

    /// Removes the entry under `key`. No-op when absent.
    fn delete(&mut self, key: &str) -> Result<()>;

    /// Removes all entries.
    fn clear(&mut self) -> Result<()>;

    /// Reports whether `key` currently holds a value.
    fn has(&mut self, key: &str) -> Result<bool>;
}

// == Asynchronous Capability ==
/// Suspending cache with per-entry expiry.
///
/// Operations suspend to model a backend round-trip; the in-memory
/// implementation completes within the suspension point without blocking.
/// Expired entries are evicted lazily by `get`, never by a background
/// sweep, so memory for an expired-but-unread entry is retained until the
/// next read of that key or a `disconnect`.
#[async_trait]
pub trait AsyncCache<T>: Send + Sync {
    /// Retrieves the value stored under `key`.
    ///
    /// When the entry's expiration time is at or before now, the read
    /// evicts it and returns `Ok(None)`.
    async fn get(&self, key: &str) -> Result<Option<T>>;

    /// Stores `value` under `key`.
    ///
    /// With `ttl_seconds`, the entry expires that many seconds from now;
    /// without, it never expires.
    async fn set(&self, key: &str, value: T, ttl_seconds: Option<u64>) -> Result<()>;

    /// Removes the entry under `key`. No-op when absent.
    async fn del(&self, key: &str) -> Result<()>;

    /// Releases all entries and any backend connection.
    async fn disconnect(&self) -> Result<()>;
}

// == Injected Backend ==
/// Minimal shape assumed of an external key-value store client.
///
/// Values cross this boundary as already-serialized strings; transport,
/// auth, and reconnection are entirely the implementor's concern.
/// Failures should surface as
/// [`CacheError::Backend`](crate::error::CacheError::Backend) and are
/// forwarded to cache callers unmodified.
pub trait KeyValueBackend {
    /// Returns the serialized value stored under `key`, if any.
    fn get(&mut self, key: &str) -> Result<Option<String>>;

    /// Stores an already-serialized value under `key`.
    fn set(&mut self, key: &str, value: String) -> Result<()>;

    /// Removes the entry under `key`.
    fn del(&mut self, key: &str) -> Result<()>;

    /// Returns 1 when `key` exists, 0 otherwise. Integer convention of
    /// the wire protocol this models.
    fn exists(&mut self, key: &str) -> Result<i64>;

    /// Reports whether this backend supports bulk clearing. Probed once
    /// at adapter construction.
    fn supports_flush(&self) -> bool {
        false
    }

    /// Removes every key. Only invoked when [`supports_flush`] returns
    /// true.
    ///
    /// [`supports_flush`]: KeyValueBackend::supports_flush
    fn flush_all(&mut self) -> Result<()> {
        Ok(())
    }
}
