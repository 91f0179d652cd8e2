use axum::{
    Router,
    routing::{get, patch},
};

use crate::state::AppState;

use super::controller::{create_ticket, get_ticket_by_id, get_tickets, update_ticket_status};

pub fn init_tickets_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_tickets).post(create_ticket))
        .route("/{id}", get(get_ticket_by_id))
        .route("/{id}/status", patch(update_ticket_status))
}
