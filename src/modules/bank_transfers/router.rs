use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{create_bank_transfer, get_bank_transfer_by_id, get_bank_transfers};

pub fn init_bank_transfers_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_bank_transfers).post(create_bank_transfer))
        .route("/{id}", get(get_bank_transfer_by_id))
}
