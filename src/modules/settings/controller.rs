use axum::{Json, extract::State};
use tracing::instrument;

use goldenhorse_core::ApiResponse;

use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{AlertConfig, ApprovalsConfig, SettingDto, UpsertSettingDto};
use super::service::SettingService;

use goldenhorse_core::AppError;

#[utoipa::path(
    get,
    path = "/api/settings",
    responses(
        (status = 200, description = "All persisted settings", body = ApiResponse<Vec<SettingDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Settings"
)]
#[instrument(skip(state))]
pub async fn get_settings(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<SettingDto>>>, AppError> {
    let settings = SettingService::list(&state.settings).await?;

    Ok(Json(ApiResponse::ok(settings)))
}

#[utoipa::path(
    put,
    path = "/api/settings",
    request_body = UpsertSettingDto,
    responses(
        (status = 200, description = "Setting written", body = ApiResponse<SettingDto>),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Settings"
)]
#[instrument(skip(state))]
pub async fn upsert_setting(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<UpsertSettingDto>,
) -> Result<Json<ApiResponse<SettingDto>>, AppError> {
    let setting = SettingService::upsert(&state.settings, dto).await?;

    Ok(Json(ApiResponse::ok(setting)))
}

#[utoipa::path(
    get,
    path = "/api/settings/approvals",
    responses(
        (status = 200, description = "Approval thresholds", body = ApiResponse<ApprovalsConfig>)
    ),
    tag = "Settings"
)]
#[instrument(skip(state))]
pub async fn get_approvals_config(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ApprovalsConfig>>, AppError> {
    let config = SettingService::approvals(&state.settings, &state.thresholds).await?;

    Ok(Json(ApiResponse::ok(config)))
}

#[utoipa::path(
    get,
    path = "/api/settings/alerts",
    responses(
        (status = 200, description = "Alert thresholds", body = ApiResponse<AlertConfig>)
    ),
    tag = "Settings"
)]
#[instrument(skip(state))]
pub async fn get_alerts_config(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<AlertConfig>>, AppError> {
    let config = SettingService::alerts(&state.settings, &state.thresholds).await?;

    Ok(Json(ApiResponse::ok(config)))
}
