//! In-Memory Implementations
//!
//! Default implementations of both cache capabilities, backed by a
//! process-local HashMap. These are what the factory hands out today.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::entry::CacheEntry;
use crate::cache::traits::{AsyncCache, Cache};
use crate::error::Result;

// == Memory Cache ==
/// Synchronous in-memory cache with no expiry semantics.
///
/// Error-free by construction: every trait operation returns `Ok`.
#[derive(Debug)]
pub struct MemoryCache<T> {
    /// Key-value storage
    entries: HashMap<String, T>,
}

impl<T> MemoryCache<T> {
    // == Constructor ==
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for MemoryCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Cache<T> for MemoryCache<T> {
    fn get(&mut self, key: &str) -> Result<Option<T>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: T) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        Ok(())
    }

    fn has(&mut self, key: &str) -> Result<bool> {
        Ok(self.entries.contains_key(key))
    }
}

// == Memory Async Cache ==
/// Asynchronous in-memory cache with lazy TTL expiration.
///
/// Operations suspend only on the internal lock and complete without
/// blocking. There is no background sweep: an expired entry stays in
/// memory until the next `get` of its key or a `disconnect`.
#[derive(Debug)]
pub struct MemoryAsyncCache<T> {
    /// Key-value storage with per-entry expiry metadata
    entries: RwLock<HashMap<String, CacheEntry<T>>>,
}

impl<T> MemoryAsyncCache<T> {
    // == Constructor ==
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    // == Length ==
    /// Returns the current number of entries, expired-but-unread ones
    /// included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl<T> Default for MemoryAsyncCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Clone + Send + Sync> AsyncCache<T> for MemoryAsyncCache<T> {
    async fn get(&self, key: &str) -> Result<Option<T>> {
        let mut entries = self.entries.write().await;

        match entries.get(key) {
            Some(entry) if entry.is_expired() => {
                // Lazy eviction: the expired entry is removed as a side
                // effect of the read.
                entries.remove(key);
                debug!("evicted expired entry for key {}", key);
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.value.clone())),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: T, ttl_seconds: Option<u64>) -> Result<()> {
        let entry = CacheEntry::new(value, ttl_seconds);
        self.entries.write().await.insert(key.to_string(), entry);
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn disconnect(&self) -> Result<()> {
        // No real connection to close; releasing the entries is the
        // in-memory equivalent.
        self.entries.write().await.clear();
        Ok(())
    }
}
