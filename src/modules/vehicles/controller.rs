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

use super::model::{CreateVehicleDto, UpdateVehicleDto, Vehicle, VehicleFilterParams};
use super::service::VehicleService;

#[utoipa::path(
    post,
    path = "/api/vehicles",
    request_body = CreateVehicleDto,
    responses(
        (status = 201, description = "Vehicle created", body = ApiResponse<Vehicle>),
        (status = 400, description = "Invalid input"),
        (status = 422, description = "Validation failed")
    ),
    tag = "Vehicles"
)]
#[instrument(skip(state))]
pub async fn create_vehicle(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateVehicleDto>,
) -> Result<(StatusCode, Json<ApiResponse<Vehicle>>), AppError> {
    let vehicle = VehicleService::create(&state.db, dto).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(vehicle))))
}

#[utoipa::path(
    get,
    path = "/api/vehicles",
    params(VehicleFilterParams),
    responses(
        (status = 200, description = "Paginated vehicles", body = ApiResponse<ListResult<Vehicle>>)
    ),
    tag = "Vehicles"
)]
#[instrument(skip(state))]
pub async fn get_vehicles(
    State(state): State<AppState>,
    Query(params): Query<VehicleFilterParams>,
) -> Result<Json<ApiResponse<ListResult<Vehicle>>>, AppError> {
    let vehicles = VehicleService::list(&state.db, params).await?;

    Ok(Json(ApiResponse::ok(vehicles)))
}

#[utoipa::path(
    get,
    path = "/api/vehicles/{id}",
    params(("id" = Uuid, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Vehicle details", body = ApiResponse<Vehicle>),
        (status = 404, description = "Vehicle not found")
    ),
    tag = "Vehicles"
)]
#[instrument(skip(state))]
pub async fn get_vehicle_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vehicle>>, AppError> {
    let vehicle = VehicleService::get_by_id(&state.db, id).await?;

    Ok(Json(ApiResponse::ok(vehicle)))
}

#[utoipa::path(
    put,
    path = "/api/vehicles/{id}",
    params(("id" = Uuid, Path, description = "Vehicle ID")),
    request_body = UpdateVehicleDto,
    responses(
        (status = 200, description = "Vehicle updated", body = ApiResponse<Vehicle>),
        (status = 404, description = "Vehicle not found"),
        (status = 422, description = "Validation failed")
    ),
    tag = "Vehicles"
)]
#[instrument(skip(state))]
pub async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateVehicleDto>,
) -> Result<Json<ApiResponse<Vehicle>>, AppError> {
    let vehicle = VehicleService::update(&state.db, id, dto).await?;

    Ok(Json(ApiResponse::ok(vehicle)))
}

#[utoipa::path(
    delete,
    path = "/api/vehicles/{id}",
    params(("id" = Uuid, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Vehicle deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Vehicle not found")
    ),
    tag = "Vehicles"
)]
#[instrument(skip(state))]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    VehicleService::delete(&state.db, id).await?;

    Ok(Json(ApiResponse::message("Vehicle deleted")))
}
