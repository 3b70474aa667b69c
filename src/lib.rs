//! Task Cache - a minimal key-value cache layer for CLI task orchestration
//!
//! Provides two narrow cache capabilities (synchronous, asynchronous with
//! lazy TTL expiration), in-memory implementations of both, an adapter
//! over an injected external key-value store, and a factory that builds a
//! cache from configuration.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use cache::{
    create_async_cache, create_cache, AsyncCache, Cache, CacheEntry, ExternalCache,
    KeyValueBackend, MemoryAsyncCache, MemoryCache,
};
pub use config::CacheOptions;
pub use error::{CacheError, Result};
pub use models::TaskEntry;
