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

use super::model::{CreateTicketDto, Ticket, TicketFilterParams, UpdateTicketStatusDto};
use super::service::TicketService;

#[utoipa::path(
    post,
    path = "/api/tickets",
    request_body = CreateTicketDto,
    responses(
        (status = 201, description = "Ticket created", body = ApiResponse<Ticket>),
        (status = 400, description = "Invalid input"),
        (status = 422, description = "Validation failed")
    ),
    tag = "Tickets"
)]
#[instrument(skip(state))]
pub async fn create_ticket(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateTicketDto>,
) -> Result<(StatusCode, Json<ApiResponse<Ticket>>), AppError> {
    let ticket = TicketService::create(&state.db, dto).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(ticket))))
}

#[utoipa::path(
    get,
    path = "/api/tickets",
    params(TicketFilterParams),
    responses(
        (status = 200, description = "Paginated tickets", body = ApiResponse<ListResult<Ticket>>)
    ),
    tag = "Tickets"
)]
#[instrument(skip(state))]
pub async fn get_tickets(
    State(state): State<AppState>,
    Query(params): Query<TicketFilterParams>,
) -> Result<Json<ApiResponse<ListResult<Ticket>>>, AppError> {
    let tickets = TicketService::list(&state.db, params).await?;

    Ok(Json(ApiResponse::ok(tickets)))
}

#[utoipa::path(
    get,
    path = "/api/tickets/{id}",
    params(("id" = Uuid, Path, description = "Ticket ID")),
    responses(
        (status = 200, description = "Ticket details", body = ApiResponse<Ticket>),
        (status = 404, description = "Ticket not found")
    ),
    tag = "Tickets"
)]
#[instrument(skip(state))]
pub async fn get_ticket_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Ticket>>, AppError> {
    let ticket = TicketService::get_by_id(&state.db, id).await?;

    Ok(Json(ApiResponse::ok(ticket)))
}

#[utoipa::path(
    patch,
    path = "/api/tickets/{id}/status",
    params(("id" = Uuid, Path, description = "Ticket ID")),
    request_body = UpdateTicketStatusDto,
    responses(
        (status = 200, description = "Ticket status updated", body = ApiResponse<Ticket>),
        (status = 404, description = "Ticket not found"),
        (status = 422, description = "Validation failed")
    ),
    tag = "Tickets"
)]
#[instrument(skip(state))]
pub async fn update_ticket_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateTicketStatusDto>,
) -> Result<Json<ApiResponse<Ticket>>, AppError> {
    let ticket = TicketService::update_status(&state.db, id, dto).await?;

    Ok(Json(ApiResponse::ok(ticket)))
}
