use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_alerts_config, get_approvals_config, get_settings, upsert_setting};

pub fn init_settings_router() -> Router<AppState> {
    Router::new()
        .route("/approvals", get(get_approvals_config))
        .route("/alerts", get(get_alerts_config))
}

/// Administrative settings routes; callers must pass the admin guard.
pub fn init_settings_admin_router() -> Router<AppState> {
    Router::new().route("/", get(get_settings).put(upsert_setting))
}
