//! Settings snapshot cache.
//!
//! Configuration values live in a persisted key/value store, grouped by
//! category. They change rarely and are read on hot paths, so reads go
//! through a single in-process snapshot with one `loaded_at` timestamp.
//! A miss or an expired snapshot triggers a whole-table reload, trading
//! read amplification for simplicity; there is no per-key TTL.
//!
//! Reload takes no lock across the store read, so concurrent misses in
//! the same window may each reload. The store is read-only here and
//! settings are low-cardinality, which makes that acceptable.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One persisted configuration row. Identity is `(category, key)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Setting {
    pub category: String,
    pub key: String,
    pub value: String,
}

/// Error type for settings operations.
///
/// A store failure propagates to the caller; there is no retry and no
/// partial cache use.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Settings store error: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SettingsError {
    pub fn store<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Store(Box::new(err))
    }
}

/// Persistence seam for settings. The whole table is read at once; no
/// pagination is assumed.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Setting>, SettingsError>;

    async fn upsert(
        &self,
        category: &str,
        key: &str,
        value: &str,
    ) -> Result<Setting, SettingsError>;
}

/// Builds the namespaced lookup key `CATEGORY.key`, case-insensitive.
fn snapshot_key(category: &str, key: &str) -> String {
    format!("{}.{}", category, key).to_uppercase()
}

struct Snapshot {
    values: HashMap<String, String>,
    loaded_at: Instant,
}

/// TTL-bounded read-through cache over a [`SettingsStore`].
///
/// Constructed once at startup and carried in application state; cloning
/// shares the snapshot. Writes go straight to the store and become
/// visible to readers only after the snapshot expires (staleness is
/// bounded by the TTL).
#[derive(Clone)]
pub struct SettingsCache {
    store: Arc<dyn SettingsStore>,
    ttl: Duration,
    snapshot: Arc<RwLock<Option<Snapshot>>>,
}

impl std::fmt::Debug for SettingsCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsCache")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl SettingsCache {
    pub fn new(store: Arc<dyn SettingsStore>, ttl: Duration) -> Self {
        Self {
            store,
            ttl,
            snapshot: Arc::new(RwLock::new(None)),
        }
    }

    /// The underlying store, for administrative writes.
    pub fn store(&self) -> &Arc<dyn SettingsStore> {
        &self.store
    }

    /// Looks up a setting by its namespaced key (e.g.
    /// `APPROVALS.invoiceThreshold`, case-insensitive).
    ///
    /// Serves from the snapshot while it is fresh; otherwise reloads the
    /// whole settings set from the store and answers from the new
    /// snapshot. Returns `None` for keys absent from the store.
    pub async fn get(&self, key: &str) -> Result<Option<String>, SettingsError> {
        let lookup = key.to_uppercase();

        if let Some(found) = self.fresh_lookup(&lookup) {
            return Ok(found);
        }

        let settings = self.store.find_all().await?;
        debug!(count = settings.len(), "Settings snapshot reloaded");

        let values: HashMap<String, String> = settings
            .into_iter()
            .map(|s| (snapshot_key(&s.category, &s.key), s.value))
            .collect();
        let found = values.get(&lookup).cloned();

        let mut guard = self
            .snapshot
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Some(Snapshot {
            values,
            loaded_at: Instant::now(),
        });

        Ok(found)
    }

    /// Returns `Some(lookup result)` when the snapshot is fresh, `None`
    /// when a reload is needed.
    fn fresh_lookup(&self, lookup: &str) -> Option<Option<String>> {
        let guard = self
            .snapshot
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let snapshot = guard.as_ref()?;

        if snapshot.loaded_at.elapsed() >= self.ttl {
            return None;
        }

        Some(snapshot.values.get(lookup).cloned())
    }

    /// Like [`get`](Self::get), with a default for absent keys.
    pub async fn get_or(&self, key: &str, default: &str) -> Result<String, SettingsError> {
        Ok(self
            .get(key)
            .await?
            .unwrap_or_else(|| default.to_string()))
    }

    /// Numeric accessor. Falls back to `default` when the value is
    /// absent, empty, non-numeric, or non-finite.
    pub async fn get_number(&self, key: &str, default: f64) -> Result<f64, SettingsError> {
        let parsed = self
            .get(key)
            .await?
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|n| n.is_finite());

        Ok(parsed.unwrap_or(default))
    }
}

/// In-memory [`SettingsStore`] used by tests and local development.
///
/// Counts `find_all` calls so tests can assert on reload behavior.
#[derive(Default)]
pub struct InMemorySettingsStore {
    rows: RwLock<Vec<Setting>>,
    loads: std::sync::atomic::AtomicUsize,
}

impl InMemorySettingsStore {
    pub fn new(rows: Vec<Setting>) -> Self {
        Self {
            rows: RwLock::new(rows),
            loads: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Number of `find_all` calls issued so far.
    pub fn loads(&self) -> usize {
        self.loads.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn find_all(&self) -> Result<Vec<Setting>, SettingsError> {
        self.loads
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Ok(self
            .rows
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone())
    }

    async fn upsert(
        &self,
        category: &str,
        key: &str,
        value: &str,
    ) -> Result<Setting, SettingsError> {
        let mut rows = self
            .rows
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let setting = Setting {
            category: category.to_string(),
            key: key.to_string(),
            value: value.to_string(),
        };

        if let Some(existing) = rows
            .iter_mut()
            .find(|s| s.category.eq_ignore_ascii_case(category) && s.key.eq_ignore_ascii_case(key))
        {
            existing.value = value.to_string();
        } else {
            rows.push(setting.clone());
        }

        Ok(setting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_store() -> Arc<InMemorySettingsStore> {
        Arc::new(InMemorySettingsStore::new(vec![
            Setting {
                category: "APPROVALS".to_string(),
                key: "invoiceThreshold".to_string(),
                value: "25000".to_string(),
            },
            Setting {
                category: "alerts".to_string(),
                key: "lowStockThreshold".to_string(),
                value: "10".to_string(),
            },
            Setting {
                category: "APPROVALS".to_string(),
                key: "note".to_string(),
                value: "abc".to_string(),
            },
        ]))
    }

    #[tokio::test]
    async fn test_get_is_case_insensitive_and_namespaced() {
        let store = seeded_store();
        let cache = SettingsCache::new(store, Duration::from_secs(60));

        let value = cache.get("approvals.invoicethreshold").await.unwrap();
        assert_eq!(value, Some("25000".to_string()));

        // Lower-cased category in the store resolves the same way.
        let value = cache.get("ALERTS.lowStockThreshold").await.unwrap();
        assert_eq!(value, Some("10".to_string()));
    }

    #[tokio::test]
    async fn test_at_most_one_reload_per_ttl_window() {
        let store = seeded_store();
        let cache = SettingsCache::new(store.clone(), Duration::from_secs(60));

        let _ = cache.get("APPROVALS.invoiceThreshold").await.unwrap();
        let _ = cache.get("ALERTS.lowStockThreshold").await.unwrap();
        let _ = cache.get("APPROVALS.missing").await.unwrap();

        // First call loads; subsequent calls within the TTL must not.
        assert_eq!(store.loads(), 1);
    }

    #[tokio::test]
    async fn test_expired_snapshot_reloads() {
        let store = seeded_store();
        let cache = SettingsCache::new(store.clone(), Duration::from_millis(10));

        let _ = cache.get("APPROVALS.invoiceThreshold").await.unwrap();
        tokio::time::sleep(Duration::from_millis(30)).await;
        let _ = cache.get("APPROVALS.invoiceThreshold").await.unwrap();

        assert_eq!(store.loads(), 2);
    }

    #[tokio::test]
    async fn test_write_is_stale_until_ttl_elapses() {
        let store = seeded_store();
        let cache = SettingsCache::new(store.clone(), Duration::from_millis(50));

        let before = cache
            .get_number("APPROVALS.invoiceThreshold", 0.0)
            .await
            .unwrap();
        assert_eq!(before, 25000.0);

        store
            .upsert("APPROVALS", "invoiceThreshold", "30000")
            .await
            .unwrap();

        // Within the TTL the cached snapshot still answers.
        let stale = cache
            .get_number("APPROVALS.invoiceThreshold", 0.0)
            .await
            .unwrap();
        assert_eq!(stale, 25000.0);

        tokio::time::sleep(Duration::from_millis(80)).await;

        let fresh = cache
            .get_number("APPROVALS.invoiceThreshold", 0.0)
            .await
            .unwrap();
        assert_eq!(fresh, 30000.0);
    }

    #[tokio::test]
    async fn test_get_number_falls_back_on_garbage() {
        let store = seeded_store();
        let cache = SettingsCache::new(store, Duration::from_secs(60));

        let parsed = cache
            .get_number("APPROVALS.invoiceThreshold", 1.0)
            .await
            .unwrap();
        assert_eq!(parsed, 25000.0);

        let garbage = cache.get_number("APPROVALS.note", 7.0).await.unwrap();
        assert_eq!(garbage, 7.0);

        let absent = cache.get_number("APPROVALS.missing", 42.0).await.unwrap();
        assert_eq!(absent, 42.0);
    }

    #[tokio::test]
    async fn test_get_or_default() {
        let store = seeded_store();
        let cache = SettingsCache::new(store, Duration::from_secs(60));

        let value = cache.get_or("APPROVALS.missing", "fallback").await.unwrap();
        assert_eq!(value, "fallback");
    }

    struct FailingStore;

    #[async_trait]
    impl SettingsStore for FailingStore {
        async fn find_all(&self) -> Result<Vec<Setting>, SettingsError> {
            Err(SettingsError::store(std::io::Error::other("store down")))
        }

        async fn upsert(
            &self,
            _category: &str,
            _key: &str,
            _value: &str,
        ) -> Result<Setting, SettingsError> {
            Err(SettingsError::store(std::io::Error::other("store down")))
        }
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let cache = SettingsCache::new(Arc::new(FailingStore), Duration::from_secs(60));
        let result = cache.get("ANY.key").await;
        assert!(result.is_err());
    }
}
