use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Point-in-time resource usage snapshot for the operational backend.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PerformanceReport {
    pub backend: String,
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub disk_percent: f64,
    pub uptime_hours: f64,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SyncStatus {
    pub backend: String,
    pub in_sync: bool,
    pub pending_changes: i64,
    pub last_synced_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BackupJob {
    pub backend: String,
    pub job_id: Uuid,
    pub status: String,
    pub started_at: DateTime<Utc>,
}
