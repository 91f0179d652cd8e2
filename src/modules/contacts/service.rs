use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use goldenhorse_core::{AppError, ListResult};
use goldenhorse_db::filter::{FieldFilter, ResourceTable};
use goldenhorse_db::listing::fetch_page;

use super::model::{Contact, ContactFilterParams, CreateContactDto, UpdateContactDto};

const CONTACTS: ResourceTable = ResourceTable {
    table: "contacts",
    select: "id, name, email, phone, company, address, status, created_at, updated_at",
    search_columns: &["name", "email", "phone", "company"],
    default_order: "created_at DESC",
};

pub struct ContactService;

impl ContactService {
    #[instrument(skip(db))]
    pub async fn create(db: &PgPool, dto: CreateContactDto) -> Result<Contact, AppError> {
        let contact = sqlx::query_as::<_, Contact>(
            r#"
            INSERT INTO contacts (name, email, phone, company, address, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, email, phone, company, address, status, created_at, updated_at
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&dto.phone)
        .bind(&dto.company)
        .bind(&dto.address)
        .bind(dto.status.as_deref().unwrap_or("active"))
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::bad_request(anyhow::anyhow!(
                    "A contact with this email already exists"
                ));
            }
            AppError::from(e)
        })?;

        Ok(contact)
    }

    #[instrument(skip(db))]
    pub async fn list(
        db: &PgPool,
        params: ContactFilterParams,
    ) -> Result<ListResult<Contact>, AppError> {
        let mut filters = Vec::new();
        if let Some(status) = params.status {
            filters.push(FieldFilter::equals_text("status", status));
        }

        fetch_page::<Contact>(db, &CONTACTS, &params.list, &filters).await
    }

    #[instrument(skip(db))]
    pub async fn get_by_id(db: &PgPool, id: Uuid) -> Result<Contact, AppError> {
        let contact = sqlx::query_as::<_, Contact>(
            r#"
            SELECT id, name, email, phone, company, address, status, created_at, updated_at
            FROM contacts WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;

        contact.ok_or_else(|| AppError::not_found(anyhow::anyhow!("Contact not found")))
    }

    #[instrument(skip(db))]
    pub async fn update(db: &PgPool, id: Uuid, dto: UpdateContactDto) -> Result<Contact, AppError> {
        let contact = sqlx::query_as::<_, Contact>(
            r#"
            UPDATE contacts SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                company = COALESCE($5, company),
                address = COALESCE($6, address),
                status = COALESCE($7, status),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, email, phone, company, address, status, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&dto.phone)
        .bind(&dto.company)
        .bind(&dto.address)
        .bind(&dto.status)
        .fetch_optional(db)
        .await?;

        contact.ok_or_else(|| AppError::not_found(anyhow::anyhow!("Contact not found")))
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Contact not found")));
        }

        Ok(())
    }
}
