use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{create_warehouse, get_warehouse_by_id, get_warehouses};

pub fn init_warehouses_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_warehouses).post(create_warehouse))
        .route("/{id}", get(get_warehouse_by_id))
}
