//! External-Store-Backed Adapter
//!
//! Adapts an injected key-value backend to the synchronous cache
//! capability, translating values through a JSON round-trip.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::cache::traits::{Cache, KeyValueBackend};
use crate::error::Result;

// == External Cache ==
/// Synchronous cache over an injected external store.
///
/// Values are encoded to JSON strings on write and decoded on read. The
/// adapter adds no retry or timeout logic: encode/decode failures surface
/// as [`CacheError::Serialization`](crate::error::CacheError::Serialization)
/// and backend failures are forwarded to the caller unmodified.
///
/// Multiple adapters may share one key space by wrapping clients of the
/// same external store; consistency between them is the store's concern.
#[derive(Debug)]
pub struct ExternalCache<T, B> {
    /// The injected store client
    backend: B,
    /// Whether the backend supports bulk clearing, probed once at
    /// construction
    can_flush: bool,
    _marker: PhantomData<T>,
}

impl<T, B: KeyValueBackend> ExternalCache<T, B> {
    // == Constructor ==
    /// Wraps an injected backend, probing its bulk-clear capability once.
    pub fn new(backend: B) -> Self {
        let can_flush = backend.supports_flush();

        Self {
            backend,
            can_flush,
            _marker: PhantomData,
        }
    }

    // == Supports Clear ==
    /// Reports whether `clear` will reach the backend or fall back to a
    /// no-op.
    pub fn supports_clear(&self) -> bool {
        self.can_flush
    }
}

impl<T, B> Cache<T> for ExternalCache<T, B>
where
    T: Serialize + DeserializeOwned,
    B: KeyValueBackend,
{
    fn get(&mut self, key: &str) -> Result<Option<T>> {
        match self.backend.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: T) -> Result<()> {
        let encoded = serde_json::to_string(&value)?;
        self.backend.set(key, encoded)
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.backend.del(key)
    }

    fn clear(&mut self) -> Result<()> {
        if self.can_flush {
            self.backend.flush_all()
        } else {
            // Backends without a bulk-clear operation keep their entries.
            debug!("backend does not support bulk clear, leaving entries in place");
            Ok(())
        }
    }

    fn has(&mut self, key: &str) -> Result<bool> {
        Ok(self.backend.exists(key)? != 0)
    }
}
