//! Cache configuration.
//!
//! This module provides cache tuning knobs loaded from environment
//! variables.

use std::env;
use std::time::Duration;

/// Cache configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `SETTINGS_CACHE_TTL_MS`: staleness bound for the settings snapshot in
///   milliseconds (default: `60000`)
/// - `CACHE_TTL_SECONDS`: default TTL for general cache entries in seconds
///   (default: `300`)
#[derive(Clone, Debug)]
pub struct CacheConfig {
    /// Staleness bound for the settings snapshot, in milliseconds.
    pub settings_ttl_ms: u64,

    /// Default time-to-live for general cache entries, in seconds.
    pub default_ttl_seconds: u64,
}

impl CacheConfig {
    /// Load configuration from environment variables.
    ///
    /// # Defaults
    ///
    /// - `SETTINGS_CACHE_TTL_MS`: `60000` (1 minute)
    /// - `CACHE_TTL_SECONDS`: `300` (5 minutes)
    pub fn from_env() -> Self {
        Self {
            settings_ttl_ms: env::var("SETTINGS_CACHE_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60_000),
            default_ttl_seconds: env::var("CACHE_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
        }
    }

    pub fn settings_ttl(&self) -> Duration {
        Duration::from_millis(self.settings_ttl_ms)
    }

    pub fn default_ttl(&self) -> Duration {
        Duration::from_secs(self.default_ttl_seconds)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            settings_ttl_ms: 60_000,
            default_ttl_seconds: 300,
        }
    }
}
