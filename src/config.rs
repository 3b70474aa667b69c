//! Configuration Module
//!
//! Cache construction options, loadable from environment variables.

use std::env;

/// Options recognized by the cache factory.
///
/// Every field is advisory at construction time today: `ttl` and
/// `redis_url` are carried for a future backend-selecting factory, and
/// `max_size` is accepted but not enforced by any implementation. Whether
/// size enforcement is future work or dead configuration is undecided, so
/// the field is kept as-is rather than given an invented eviction policy.
#[derive(Debug, Clone, Default)]
pub struct CacheOptions {
    /// Default TTL in seconds (not applied by any constructor today)
    pub ttl: Option<u64>,
    /// Maximum number of entries; accepted but never enforced
    pub max_size: Option<usize>,
    /// Connection string for a remote backend (ignored by the factory today)
    pub redis_url: Option<String>,
}

impl CacheOptions {
    /// Creates options by reading environment variables.
    ///
    /// Unset or unparseable variables leave the corresponding field `None`.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL` - default TTL in seconds
    /// - `CACHE_MAX_SIZE` - maximum entry count
    /// - `REDIS_URL` - remote backend connection string
    pub fn from_env() -> Self {
        Self {
            ttl: env::var("CACHE_TTL").ok().and_then(|v| v.parse().ok()),
            max_size: env::var("CACHE_MAX_SIZE").ok().and_then(|v| v.parse().ok()),
            redis_url: env::var("REDIS_URL").ok().filter(|v| !v.is_empty()),
        }
    }
}
