use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

use goldenhorse_core::AppError;

use super::model::{BackupJob, PerformanceReport, SyncStatus};

/// Operational backend the ops endpoints delegate to.
///
/// The production deployment would point this at the hosting provider's
/// management API; tests and local runs use [`SimulatedOpsBackend`].
#[async_trait]
pub trait OpsBackend: Send + Sync {
    fn name(&self) -> &str;

    async fn performance_report(&self) -> Result<PerformanceReport, AppError>;

    async fn sync_status(&self) -> Result<SyncStatus, AppError>;

    async fn run_backup(&self) -> Result<BackupJob, AppError>;
}

/// Backend that fabricates plausible numbers instead of calling out.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedOpsBackend;

#[async_trait]
impl OpsBackend for SimulatedOpsBackend {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn performance_report(&self) -> Result<PerformanceReport, AppError> {
        let mut rng = rand::thread_rng();

        Ok(PerformanceReport {
            backend: self.name().to_string(),
            cpu_percent: rng.gen_range(5.0..85.0),
            memory_percent: rng.gen_range(20.0..90.0),
            disk_percent: rng.gen_range(10.0..70.0),
            uptime_hours: rng.gen_range(1.0..720.0),
            generated_at: Utc::now(),
        })
    }

    async fn sync_status(&self) -> Result<SyncStatus, AppError> {
        let mut rng = rand::thread_rng();

        Ok(SyncStatus {
            backend: self.name().to_string(),
            in_sync: true,
            pending_changes: rng.gen_range(0..5),
            last_synced_at: Utc::now(),
        })
    }

    async fn run_backup(&self) -> Result<BackupJob, AppError> {
        Ok(BackupJob {
            backend: self.name().to_string(),
            job_id: Uuid::new_v4(),
            status: "started".to_string(),
            started_at: Utc::now(),
        })
    }
}
