use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use goldenhorse_core::{AppError, ListResult};
use goldenhorse_db::filter::{FieldFilter, ResourceTable};
use goldenhorse_db::listing::fetch_page;

use super::model::{CreateTicketDto, Ticket, TicketFilterParams, UpdateTicketStatusDto};

const TICKETS: ResourceTable = ResourceTable {
    table: "tickets",
    select: "id, subject, body, status, priority, contact_id, created_at, updated_at",
    search_columns: &["subject", "body"],
    default_order: "created_at DESC",
};

pub struct TicketService;

impl TicketService {
    #[instrument(skip(db))]
    pub async fn create(db: &PgPool, dto: CreateTicketDto) -> Result<Ticket, AppError> {
        let ticket = sqlx::query_as::<_, Ticket>(
            r#"
            INSERT INTO tickets (subject, body, priority, contact_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, subject, body, status, priority, contact_id, created_at, updated_at
            "#,
        )
        .bind(&dto.subject)
        .bind(&dto.body)
        .bind(dto.priority.as_deref().unwrap_or("normal"))
        .bind(dto.contact_id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_foreign_key_violation()
            {
                return AppError::bad_request(anyhow::anyhow!(
                    "The referenced contact does not exist"
                ));
            }
            AppError::from(e)
        })?;

        Ok(ticket)
    }

    #[instrument(skip(db))]
    pub async fn list(
        db: &PgPool,
        params: TicketFilterParams,
    ) -> Result<ListResult<Ticket>, AppError> {
        let mut filters = Vec::new();
        if let Some(status) = params.status {
            filters.push(FieldFilter::equals_text("status", status));
        }
        if let Some(priority) = params.priority {
            filters.push(FieldFilter::equals_text("priority", priority));
        }
        if let Some(contact_id) = params.contact_id {
            filters.push(FieldFilter::equals_uuid("contact_id", contact_id));
        }

        fetch_page::<Ticket>(db, &TICKETS, &params.list, &filters).await
    }

    #[instrument(skip(db))]
    pub async fn get_by_id(db: &PgPool, id: Uuid) -> Result<Ticket, AppError> {
        let ticket = sqlx::query_as::<_, Ticket>(
            r#"
            SELECT id, subject, body, status, priority, contact_id, created_at, updated_at
            FROM tickets WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;

        ticket.ok_or_else(|| AppError::not_found(anyhow::anyhow!("Ticket not found")))
    }

    #[instrument(skip(db))]
    pub async fn update_status(
        db: &PgPool,
        id: Uuid,
        dto: UpdateTicketStatusDto,
    ) -> Result<Ticket, AppError> {
        let ticket = sqlx::query_as::<_, Ticket>(
            r#"
            UPDATE tickets SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, subject, body, status, priority, contact_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&dto.status)
        .fetch_optional(db)
        .await?;

        ticket.ok_or_else(|| AppError::not_found(anyhow::anyhow!("Ticket not found")))
    }
}
