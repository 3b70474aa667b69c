//! Error types for the cache layer
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache operations.
///
/// The in-memory implementations never fail; both variants originate in
/// the external-store-backed adapter.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Value could not be encoded or decoded during an adapter round-trip
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failure reported by an injected backend, forwarded without
    /// categorization, retry, or timeout handling
    #[error("backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl CacheError {
    // == Backend Constructor ==
    /// Wraps an arbitrary backend failure.
    ///
    /// Intended for [`KeyValueBackend`](crate::cache::KeyValueBackend)
    /// implementors surfacing transport or protocol errors.
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        CacheError::Backend(Box::new(err))
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache layer.
pub type Result<T> = std::result::Result<T, CacheError>;
