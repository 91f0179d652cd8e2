use std::sync::Arc;

use sqlx::PgPool;

use goldenhorse_cache::{CacheConfig, MemoryCache, SettingsCache};
use goldenhorse_db::init_db_pool;

use crate::config::cors::CorsConfig;
use crate::config::roles::RoleConfig;
use crate::config::thresholds::ThresholdConfig;
use crate::modules::ops::backend::{OpsBackend, SimulatedOpsBackend};
use crate::modules::settings::store::PgSettingsStore;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub settings: SettingsCache,
    pub cache: MemoryCache,
    pub cache_config: CacheConfig,
    pub thresholds: ThresholdConfig,
    pub roles: RoleConfig,
    pub cors_config: CorsConfig,
    pub ops: Arc<dyn OpsBackend>,
}

pub async fn init_app_state() -> AppState {
    let db = init_db_pool().await;
    let cache_config = CacheConfig::from_env();
    let settings_store = Arc::new(PgSettingsStore::new(db.clone()));

    AppState {
        settings: SettingsCache::new(settings_store, cache_config.settings_ttl()),
        cache: MemoryCache::new(),
        cache_config,
        thresholds: ThresholdConfig::from_env(),
        roles: RoleConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        ops: Arc::new(SimulatedOpsBackend),
        db,
    }
}
