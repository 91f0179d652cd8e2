use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{get_performance_report, get_sync_status, run_backup};

pub fn init_ops_router() -> Router<AppState> {
    Router::new()
        .route("/performance", get(get_performance_report))
        .route("/sync-status", get(get_sync_status))
}

/// Backup kickoff is restricted; callers must pass the admin guard.
pub fn init_ops_admin_router() -> Router<AppState> {
    Router::new().route("/backup", post(run_backup))
}
