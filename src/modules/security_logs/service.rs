use sqlx::PgPool;
use tracing::instrument;

use goldenhorse_core::{AppError, ListResult};
use goldenhorse_db::filter::{FieldFilter, ResourceTable};
use goldenhorse_db::listing::fetch_page;

use super::model::{CreateSecurityLogDto, SecurityLog, SecurityLogFilterParams};

const SECURITY_LOGS: ResourceTable = ResourceTable {
    table: "security_logs",
    select: "id, actor, action, message, level, ip_address, created_at",
    search_columns: &["actor", "action", "message"],
    default_order: "created_at DESC",
};

pub struct SecurityLogService;

impl SecurityLogService {
    #[instrument(skip(db))]
    pub async fn create(db: &PgPool, dto: CreateSecurityLogDto) -> Result<SecurityLog, AppError> {
        let log = sqlx::query_as::<_, SecurityLog>(
            r#"
            INSERT INTO security_logs (actor, action, message, level, ip_address)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, actor, action, message, level, ip_address, created_at
            "#,
        )
        .bind(&dto.actor)
        .bind(&dto.action)
        .bind(&dto.message)
        .bind(dto.level.as_deref().unwrap_or("info"))
        .bind(&dto.ip_address)
        .fetch_one(db)
        .await?;

        Ok(log)
    }

    #[instrument(skip(db))]
    pub async fn list(
        db: &PgPool,
        params: SecurityLogFilterParams,
    ) -> Result<ListResult<SecurityLog>, AppError> {
        let mut filters = Vec::new();
        if let Some(level) = params.level {
            filters.push(FieldFilter::equals_text("level", level));
        }
        if let Some(actor) = params.actor {
            filters.push(FieldFilter::equals_text("actor", actor));
        }

        fetch_page::<SecurityLog>(db, &SECURITY_LOGS, &params.list, &filters).await
    }
}
