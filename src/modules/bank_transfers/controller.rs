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

use super::model::{BankTransfer, BankTransferFilterParams, CreateBankTransferDto};
use super::service::BankTransferService;

#[utoipa::path(
    post,
    path = "/api/bank-transfers",
    request_body = CreateBankTransferDto,
    responses(
        (status = 201, description = "Bank transfer recorded", body = ApiResponse<BankTransfer>),
        (status = 400, description = "Invalid input"),
        (status = 422, description = "Validation failed")
    ),
    tag = "Bank Transfers"
)]
#[instrument(skip(state))]
pub async fn create_bank_transfer(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateBankTransferDto>,
) -> Result<(StatusCode, Json<ApiResponse<BankTransfer>>), AppError> {
    let transfer = BankTransferService::create(&state.db, dto).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(transfer))))
}

#[utoipa::path(
    get,
    path = "/api/bank-transfers",
    params(BankTransferFilterParams),
    responses(
        (status = 200, description = "Paginated bank transfers", body = ApiResponse<ListResult<BankTransfer>>)
    ),
    tag = "Bank Transfers"
)]
#[instrument(skip(state))]
pub async fn get_bank_transfers(
    State(state): State<AppState>,
    Query(params): Query<BankTransferFilterParams>,
) -> Result<Json<ApiResponse<ListResult<BankTransfer>>>, AppError> {
    let transfers = BankTransferService::list(&state.db, params).await?;

    Ok(Json(ApiResponse::ok(transfers)))
}

#[utoipa::path(
    get,
    path = "/api/bank-transfers/{id}",
    params(("id" = Uuid, Path, description = "Bank transfer ID")),
    responses(
        (status = 200, description = "Bank transfer details", body = ApiResponse<BankTransfer>),
        (status = 404, description = "Bank transfer not found")
    ),
    tag = "Bank Transfers"
)]
#[instrument(skip(state))]
pub async fn get_bank_transfer_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<BankTransfer>>, AppError> {
    let transfer = BankTransferService::get_by_id(&state.db, id).await?;

    Ok(Json(ApiResponse::ok(transfer)))
}
