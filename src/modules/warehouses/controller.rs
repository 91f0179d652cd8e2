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

use super::model::{CreateWarehouseDto, Warehouse, WarehouseFilterParams};
use super::service::WarehouseService;

#[utoipa::path(
    post,
    path = "/api/warehouses",
    request_body = CreateWarehouseDto,
    responses(
        (status = 201, description = "Warehouse created", body = ApiResponse<Warehouse>),
        (status = 422, description = "Validation failed")
    ),
    tag = "Warehouses"
)]
#[instrument(skip(state))]
pub async fn create_warehouse(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateWarehouseDto>,
) -> Result<(StatusCode, Json<ApiResponse<Warehouse>>), AppError> {
    let warehouse = WarehouseService::create(&state.db, dto).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(warehouse))))
}

#[utoipa::path(
    get,
    path = "/api/warehouses",
    params(WarehouseFilterParams),
    responses(
        (status = 200, description = "Paginated warehouses", body = ApiResponse<ListResult<Warehouse>>)
    ),
    tag = "Warehouses"
)]
#[instrument(skip(state))]
pub async fn get_warehouses(
    State(state): State<AppState>,
    Query(params): Query<WarehouseFilterParams>,
) -> Result<Json<ApiResponse<ListResult<Warehouse>>>, AppError> {
    let warehouses = WarehouseService::list(&state.db, params).await?;

    Ok(Json(ApiResponse::ok(warehouses)))
}

#[utoipa::path(
    get,
    path = "/api/warehouses/{id}",
    params(("id" = Uuid, Path, description = "Warehouse ID")),
    responses(
        (status = 200, description = "Warehouse details", body = ApiResponse<Warehouse>),
        (status = 404, description = "Warehouse not found")
    ),
    tag = "Warehouses"
)]
#[instrument(skip(state))]
pub async fn get_warehouse_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Warehouse>>, AppError> {
    let warehouse = WarehouseService::get_by_id(&state.db, id).await?;

    Ok(Json(ApiResponse::ok(warehouse)))
}
