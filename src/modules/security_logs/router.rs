use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{create_security_log, get_security_logs};

/// Log writes come from internal services; callers must pass the staff
/// guard.
pub fn init_security_logs_router() -> Router<AppState> {
    Router::new().route("/", post(create_security_log))
}

/// Audit trail reads are restricted; callers must pass the admin guard.
pub fn init_security_logs_admin_router() -> Router<AppState> {
    Router::new().route("/", get(get_security_logs))
}
