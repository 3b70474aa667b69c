//! Cache Module
//!
//! Capability contracts and implementations for the orchestration cache:
//! a synchronous in-memory cache, an asynchronous cache with lazy TTL
//! expiration, an adapter over an injected external key-value store, and
//! a factory that constructs an implementation from configuration.

mod entry;
mod external;
mod factory;
mod memory;
mod traits;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use external::ExternalCache;
pub use factory::{create_async_cache, create_cache};
pub use memory::{MemoryAsyncCache, MemoryCache};
pub use traits::{AsyncCache, Cache, KeyValueBackend};
