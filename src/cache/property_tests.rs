//! Property-Based Tests for Cache Module
//!
//! Uses proptest to verify the cache contracts over arbitrary keys,
//! values, and operation sequences.

use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::cache::{AsyncCache, Cache, ExternalCache, KeyValueBackend, MemoryAsyncCache, MemoryCache};
use crate::error::Result;

// == Strategies ==
/// Generates cache keys
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,64}"
}

/// Generates cache values
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,256}"
}

/// Generates a sequence of cache operations for model-based testing
#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: String },
    Get { key: String },
    Delete { key: String },
    Has { key: String },
    Clear,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        4 => (key_strategy(), value_strategy())
            .prop_map(|(key, value)| CacheOp::Set { key, value }),
        4 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        2 => key_strategy().prop_map(|key| CacheOp::Delete { key }),
        2 => key_strategy().prop_map(|key| CacheOp::Has { key }),
        1 => Just(CacheOp::Clear),
    ]
}

/// A JSON-representable payload for adapter round-trip properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Payload {
    name: String,
    count: i64,
    tags: Vec<String>,
}

fn payload_strategy() -> impl Strategy<Value = Payload> {
    (
        "[a-zA-Z0-9 ]{0,32}",
        any::<i64>(),
        prop::collection::vec("[a-z]{1,8}", 0..4),
    )
        .prop_map(|(name, count, tags)| Payload { name, count, tags })
}

/// In-memory stand-in for a remote store used by adapter properties
#[derive(Default)]
struct FakeBackend {
    data: HashMap<String, String>,
}

impl KeyValueBackend for FakeBackend {
    fn get(&mut self, key: &str) -> Result<Option<String>> {
        Ok(self.data.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.data.insert(key.to_string(), value);
        Ok(())
    }

    fn del(&mut self, key: &str) -> Result<()> {
        self.data.remove(key);
        Ok(())
    }

    fn exists(&mut self, key: &str) -> Result<i64> {
        Ok(if self.data.contains_key(key) { 1 } else { 0 })
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // A stored value is returned unchanged until the next overwrite,
    // delete, or clear.
    #[test]
    fn prop_sync_roundtrip(key in key_strategy(), value in value_strategy()) {
        let mut cache = MemoryCache::new();

        cache.set(&key, value.clone()).unwrap();

        prop_assert_eq!(cache.get(&key).unwrap(), Some(value));
        prop_assert!(cache.has(&key).unwrap());
    }

    // Overwriting a key makes get return the newest value, with a single
    // entry retained.
    #[test]
    fn prop_sync_overwrite_last_write_wins(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let mut cache = MemoryCache::new();

        cache.set(&key, value1).unwrap();
        cache.set(&key, value2.clone()).unwrap();

        prop_assert_eq!(cache.get(&key).unwrap(), Some(value2));
        prop_assert_eq!(cache.len(), 1);
    }

    // Delete removes the entry; deleting an absent key changes nothing.
    #[test]
    fn prop_sync_delete(key in key_strategy(), value in value_strategy()) {
        let mut cache = MemoryCache::new();

        cache.set(&key, value).unwrap();
        cache.delete(&key).unwrap();

        prop_assert_eq!(cache.get(&key).unwrap(), None);
        prop_assert!(!cache.has(&key).unwrap());

        // Second delete is a no-op
        cache.delete(&key).unwrap();
        prop_assert_eq!(cache.len(), 0);
    }

    // Clear empties the cache for every previously set key.
    #[test]
    fn prop_sync_clear_empties(
        entries in prop::collection::vec((key_strategy(), value_strategy()), 1..20)
    ) {
        let mut cache = MemoryCache::new();

        for (key, value) in &entries {
            cache.set(key, value.clone()).unwrap();
        }

        cache.clear().unwrap();

        prop_assert!(cache.is_empty());
        for (key, _) in &entries {
            prop_assert_eq!(cache.get(key).unwrap(), None);
            prop_assert!(!cache.has(key).unwrap());
        }
    }

    // The cache behaves exactly like a plain map under any operation
    // sequence.
    #[test]
    fn prop_sync_matches_model(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let mut cache = MemoryCache::new();
        let mut model: HashMap<String, String> = HashMap::new();

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    cache.set(&key, value.clone()).unwrap();
                    model.insert(key, value);
                }
                CacheOp::Get { key } => {
                    prop_assert_eq!(cache.get(&key).unwrap(), model.get(&key).cloned());
                }
                CacheOp::Delete { key } => {
                    cache.delete(&key).unwrap();
                    model.remove(&key);
                }
                CacheOp::Has { key } => {
                    prop_assert_eq!(cache.has(&key).unwrap(), model.contains_key(&key));
                }
                CacheOp::Clear => {
                    cache.clear().unwrap();
                    model.clear();
                }
            }
        }

        prop_assert_eq!(cache.len(), model.len());
    }

    // Adapter round-trip: encode then decode is identity for
    // JSON-representable payloads.
    #[test]
    fn prop_adapter_roundtrip(key in key_strategy(), payload in payload_strategy()) {
        let mut cache = ExternalCache::new(FakeBackend::default());

        cache.set(&key, payload.clone()).unwrap();

        prop_assert_eq!(cache.get(&key).unwrap(), Some(payload));
        prop_assert!(cache.has(&key).unwrap());
    }

    // Without a TTL, async entries persist until removed.
    #[test]
    fn prop_async_no_ttl_persists(key in key_strategy(), value in value_strategy()) {
        tokio_test::block_on(async {
            let cache = MemoryAsyncCache::new();

            cache.set(&key, value.clone(), None).await.unwrap();

            prop_assert_eq!(cache.get(&key).await.unwrap(), Some(value));

            cache.del(&key).await.unwrap();
            prop_assert_eq!(cache.get(&key).await.unwrap(), None);
            Ok(())
        })?;
    }

    // Disconnect releases every entry, including ones with a future
    // expiry.
    #[test]
    fn prop_async_disconnect_releases_all(
        entries in prop::collection::vec((key_strategy(), value_strategy()), 1..20)
    ) {
        tokio_test::block_on(async {
            let cache = MemoryAsyncCache::new();

            for (i, (key, value)) in entries.iter().enumerate() {
                // Mix of never-expiring and far-future entries
                let ttl = if i % 2 == 0 { None } else { Some(3600) };
                cache.set(key, value.clone(), ttl).await.unwrap();
            }

            cache.disconnect().await.unwrap();

            prop_assert_eq!(cache.len().await, 0);
            for (key, _) in &entries {
                prop_assert_eq!(cache.get(key).await.unwrap(), None);
            }
            Ok(())
        })?;
    }
}

// Separate proptest block with fewer cases for time-sensitive TTL tests
proptest! {
    #![proptest_config(ProptestConfig::with_cases(3))]

    // An entry stored with a TTL is readable before the TTL elapses and
    // absent (and evicted) at or after it.
    #[test]
    fn prop_async_ttl_expiration(key in key_strategy(), value in value_strategy()) {
        tokio_test::block_on(async {
            let cache = MemoryAsyncCache::new();

            cache.set(&key, value.clone(), Some(1)).await.unwrap();

            prop_assert_eq!(cache.get(&key).await.unwrap(), Some(value));

            tokio::time::sleep(std::time::Duration::from_millis(1100)).await;

            prop_assert_eq!(cache.get(&key).await.unwrap(), None);
            prop_assert_eq!(cache.len().await, 0, "expired read should evict");
            Ok(())
        })?;
    }
}
