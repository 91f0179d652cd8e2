use axum::{
    Router,
    routing::{delete, get},
};

use crate::state::AppState;

use super::controller::{
    create_contact, delete_contact, get_contact_by_id, get_contacts, update_contact,
};

pub fn init_contacts_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_contacts).post(create_contact))
        .route("/{id}", get(get_contact_by_id).put(update_contact))
}

/// Destructive contact routes; callers must pass the admin guard.
pub fn init_contacts_admin_router() -> Router<AppState> {
    Router::new().route("/{id}", delete(delete_contact))
}
