//! Cache Factory
//!
//! Constructs a cache implementation from configuration. Backend
//! selection is not implemented yet: both entry points always return the
//! in-memory implementation and emit a warning when `redis_url` is set.

use tracing::warn;

use crate::cache::memory::{MemoryAsyncCache, MemoryCache};
use crate::cache::traits::{AsyncCache, Cache};
use crate::config::CacheOptions;

// == Sync Factory ==
/// Creates a synchronous cache from the given options.
///
/// Always constructs [`MemoryCache`] today. `options.redis_url` is
/// accepted but not acted on, and no implementation enforces
/// `options.max_size`.
pub fn create_cache<T>(options: &CacheOptions) -> Box<dyn Cache<T>>
where
    T: Clone + 'static,
{
    if options.redis_url.is_some() {
        warn!("redis_url is set but backend selection is not implemented, using in-memory cache");
    }

    Box::new(MemoryCache::new())
}

// == Async Factory ==
/// Creates an asynchronous cache from the given options.
///
/// Always constructs [`MemoryAsyncCache`] today, regardless of
/// `options.redis_url`.
pub fn create_async_cache<T>(options: &CacheOptions) -> Box<dyn AsyncCache<T>>
where
    T: Clone + Send + Sync + 'static,
{
    if options.redis_url.is_some() {
        warn!("redis_url is set but backend selection is not implemented, using in-memory cache");
    }

    Box::new(MemoryAsyncCache::new())
}
