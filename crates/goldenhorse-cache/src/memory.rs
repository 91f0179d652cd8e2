//! Tag-based in-memory cache.
//!
//! A general-purpose key/value store with per-entry expiry and group
//! invalidation. Values are JSON-serialized so the cache can hold any
//! serializable type behind one map.
//!
//! Eviction is lazy: an expired entry stays in the map until the key is
//! next read or its tag is invalidated. There is no size bound and no
//! background sweep, which is only acceptable for the small populations
//! this cache serves.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{Duration, Instant};

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error};

/// Error type for cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

struct CacheEntry {
    value: serde_json::Value,
    expires_at: Instant,
    tags: HashSet<String>,
}

/// In-process cache with per-entry TTL and tag-based invalidation.
///
/// Cloning shares the underlying map. Each operation is a single map
/// mutation under the lock; there is no cross-operation transaction, so a
/// `revalidate_tag` racing a `set` on the same key is last-write-wins.
#[derive(Clone, Default)]
pub struct MemoryCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
}

impl std::fmt::Debug for MemoryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCache")
            .field("entries", &self.read().len())
            .finish()
    }
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, CacheEntry>> {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, CacheEntry>> {
        self.entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Gets a cached value by key.
    ///
    /// Returns `None` if the key is absent, expired, or fails to
    /// deserialize. An expired entry is removed before the miss is
    /// reported, so no caller ever observes a value past its TTL.
    pub fn get<T>(&self, key: &str) -> Option<T>
    where
        T: DeserializeOwned,
    {
        let mut entries = self.write();

        match entries.get(key) {
            Some(entry) if entry.expires_at <= Instant::now() => {
                entries.remove(key);
                debug!(cache.key = %key, "Cache entry expired");
                None
            }
            Some(entry) => {
                debug!(cache.key = %key, "Cache hit");
                match serde_json::from_value(entry.value.clone()) {
                    Ok(parsed) => Some(parsed),
                    Err(e) => {
                        error!(cache.key = %key, error = %e, "Failed to deserialize cached value");
                        None
                    }
                }
            }
            None => {
                debug!(cache.key = %key, "Cache miss");
                None
            }
        }
    }

    /// Stores a value with an absolute expiry of now + `ttl`.
    ///
    /// Overwrites any existing entry unconditionally, tags included.
    pub fn set<T>(&self, key: &str, value: &T, ttl: Duration, tags: &[&str]) -> Result<(), CacheError>
    where
        T: Serialize,
    {
        let value = serde_json::to_value(value)?;
        let entry = CacheEntry {
            value,
            expires_at: Instant::now() + ttl,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        };

        self.write().insert(key.to_string(), entry);

        debug!(cache.key = %key, cache.ttl_secs = %ttl.as_secs(), "Cache set");

        Ok(())
    }

    /// Removes every entry whose tag set contains `tag`.
    ///
    /// Full scan over all entries; returns the number removed.
    pub fn revalidate_tag(&self, tag: &str) -> usize {
        let mut entries = self.write();
        let before = entries.len();
        entries.retain(|_, entry| !entry.tags.contains(tag));
        let removed = before - entries.len();

        debug!(cache.tag = %tag, cache.removed = %removed, "Tag invalidated");

        removed
    }

    /// Whether a key is present, without touching expiry.
    pub fn exists(&self, key: &str) -> bool {
        self.read().contains_key(key)
    }

    /// Raw entry count, including expired entries not yet purged by a read.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
