use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use goldenhorse_core::{ApiResponse, AppError, ListResult};

use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{Contact, ContactFilterParams, CreateContactDto, UpdateContactDto};
use super::service::ContactService;

#[utoipa::path(
    post,
    path = "/api/contacts",
    request_body = CreateContactDto,
    responses(
        (status = 201, description = "Contact created", body = ApiResponse<Contact>),
        (status = 400, description = "Invalid input"),
        (status = 422, description = "Validation failed")
    ),
    tag = "Contacts"
)]
#[instrument(skip(state))]
pub async fn create_contact(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateContactDto>,
) -> Result<(StatusCode, Json<ApiResponse<Contact>>), AppError> {
    let contact = ContactService::create(&state.db, dto).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(contact))))
}

#[utoipa::path(
    get,
    path = "/api/contacts",
    params(ContactFilterParams),
    responses(
        (status = 200, description = "Paginated contacts", body = ApiResponse<ListResult<Contact>>)
    ),
    tag = "Contacts"
)]
#[instrument(skip(state))]
pub async fn get_contacts(
    State(state): State<AppState>,
    Query(params): Query<ContactFilterParams>,
) -> Result<Json<ApiResponse<ListResult<Contact>>>, AppError> {
    let contacts = ContactService::list(&state.db, params).await?;

    Ok(Json(ApiResponse::ok(contacts)))
}

#[utoipa::path(
    get,
    path = "/api/contacts/{id}",
    params(("id" = Uuid, Path, description = "Contact ID")),
    responses(
        (status = 200, description = "Contact details", body = ApiResponse<Contact>),
        (status = 404, description = "Contact not found")
    ),
    tag = "Contacts"
)]
#[instrument(skip(state))]
pub async fn get_contact_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Contact>>, AppError> {
    let contact = ContactService::get_by_id(&state.db, id).await?;

    Ok(Json(ApiResponse::ok(contact)))
}

#[utoipa::path(
    put,
    path = "/api/contacts/{id}",
    params(("id" = Uuid, Path, description = "Contact ID")),
    request_body = UpdateContactDto,
    responses(
        (status = 200, description = "Contact updated", body = ApiResponse<Contact>),
        (status = 404, description = "Contact not found"),
        (status = 422, description = "Validation failed")
    ),
    tag = "Contacts"
)]
#[instrument(skip(state))]
pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateContactDto>,
) -> Result<Json<ApiResponse<Contact>>, AppError> {
    let contact = ContactService::update(&state.db, id, dto).await?;

    Ok(Json(ApiResponse::ok(contact)))
}

#[utoipa::path(
    delete,
    path = "/api/contacts/{id}",
    params(("id" = Uuid, Path, description = "Contact ID")),
    responses(
        (status = 200, description = "Contact deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Contact not found")
    ),
    tag = "Contacts"
)]
#[instrument(skip(state))]
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    ContactService::delete(&state.db, id).await?;

    Ok(Json(ApiResponse::message("Contact deleted")))
}
