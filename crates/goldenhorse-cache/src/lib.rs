//! # Golden Horse Cache
//!
//! In-process caching for the Golden Horse API.
//!
//! This crate provides:
//! - A general-purpose key/value cache with per-entry TTL and tag-based
//!   group invalidation ([`MemoryCache`])
//! - A TTL-bounded, whole-snapshot cache over persisted configuration
//!   settings ([`SettingsCache`])
//! - Cache configuration from environment variables ([`CacheConfig`])
//!
//! Both caches are explicit instances held in application state; there is
//! no process-global cache.
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use goldenhorse_cache::{CacheConfig, MemoryCache, SettingsCache};
//!
//! let config = CacheConfig::from_env();
//! let cache = MemoryCache::new();
//!
//! cache.set("contacts:list", &contacts, config.default_ttl(), &["contacts"])?;
//! let hit: Option<Vec<Contact>> = cache.get("contacts:list");
//! cache.revalidate_tag("contacts");
//!
//! let settings = SettingsCache::new(store, config.settings_ttl());
//! let threshold = settings.get_number("APPROVALS.invoiceThreshold", 25000.0).await?;
//! ```

pub mod config;
pub mod memory;
pub mod settings;

pub use config::CacheConfig;
pub use memory::{CacheError, MemoryCache};
pub use settings::{
    InMemorySettingsStore, Setting, SettingsCache, SettingsError, SettingsStore,
};
