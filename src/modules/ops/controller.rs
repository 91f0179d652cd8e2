use axum::{Json, extract::State};
use tracing::{info, instrument};

use goldenhorse_core::{ApiResponse, AppError};

use crate::state::AppState;

use super::model::{BackupJob, PerformanceReport, SyncStatus};

const PERFORMANCE_CACHE_KEY: &str = "ops.performance";
const OPS_TAG: &str = "ops";

#[utoipa::path(
    get,
    path = "/api/ops/performance",
    responses(
        (status = 200, description = "Resource usage report", body = ApiResponse<PerformanceReport>)
    ),
    tag = "Ops"
)]
#[instrument(skip(state))]
pub async fn get_performance_report(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<PerformanceReport>>, AppError> {
    if let Some(report) = state.cache.get::<PerformanceReport>(PERFORMANCE_CACHE_KEY) {
        return Ok(Json(ApiResponse::ok(report)));
    }

    let report = state.ops.performance_report().await?;
    state.cache.set(
        PERFORMANCE_CACHE_KEY,
        &report,
        state.cache_config.default_ttl(),
        &[OPS_TAG],
    )?;

    Ok(Json(ApiResponse::ok(report)))
}

#[utoipa::path(
    get,
    path = "/api/ops/sync-status",
    responses(
        (status = 200, description = "Replication status", body = ApiResponse<SyncStatus>)
    ),
    tag = "Ops"
)]
#[instrument(skip(state))]
pub async fn get_sync_status(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<SyncStatus>>, AppError> {
    let status = state.ops.sync_status().await?;

    Ok(Json(ApiResponse::ok(status)))
}

#[utoipa::path(
    post,
    path = "/api/ops/backup",
    responses(
        (status = 200, description = "Backup job started", body = ApiResponse<BackupJob>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Ops"
)]
#[instrument(skip(state))]
pub async fn run_backup(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<BackupJob>>, AppError> {
    let job = state.ops.run_backup().await?;

    // A fresh backup invalidates any cached operational reads.
    let removed = state.cache.revalidate_tag(OPS_TAG);
    info!(job_id = %job.job_id, cache_entries_removed = removed, "Backup started");

    Ok(Json(ApiResponse::ok(job)))
}
