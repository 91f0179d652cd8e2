use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use tracing::instrument;

use goldenhorse_core::{ApiResponse, AppError, ListResult};

use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{CreateSecurityLogDto, SecurityLog, SecurityLogFilterParams};
use super::service::SecurityLogService;

#[utoipa::path(
    post,
    path = "/api/security-logs",
    request_body = CreateSecurityLogDto,
    responses(
        (status = 201, description = "Security log recorded", body = ApiResponse<SecurityLog>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 422, description = "Validation failed")
    ),
    tag = "Security Logs"
)]
#[instrument(skip(state))]
pub async fn create_security_log(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateSecurityLogDto>,
) -> Result<(StatusCode, Json<ApiResponse<SecurityLog>>), AppError> {
    let log = SecurityLogService::create(&state.db, dto).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(log))))
}

#[utoipa::path(
    get,
    path = "/api/security-logs",
    params(SecurityLogFilterParams),
    responses(
        (status = 200, description = "Paginated security logs", body = ApiResponse<ListResult<SecurityLog>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Security Logs"
)]
#[instrument(skip(state))]
pub async fn get_security_logs(
    State(state): State<AppState>,
    Query(params): Query<SecurityLogFilterParams>,
) -> Result<Json<ApiResponse<ListResult<SecurityLog>>>, AppError> {
    let logs = SecurityLogService::list(&state.db, params).await?;

    Ok(Json(ApiResponse::ok(logs)))
}
