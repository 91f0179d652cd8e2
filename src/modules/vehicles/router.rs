use axum::{
    Router,
    routing::{delete, get},
};

use crate::state::AppState;

use super::controller::{
    create_vehicle, delete_vehicle, get_vehicle_by_id, get_vehicles, update_vehicle,
};

pub fn init_vehicles_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_vehicles).post(create_vehicle))
        .route("/{id}", get(get_vehicle_by_id).put(update_vehicle))
}

/// Destructive vehicle routes; callers must pass the admin guard.
pub fn init_vehicles_admin_router() -> Router<AppState> {
    Router::new().route("/{id}", delete(delete_vehicle))
}
