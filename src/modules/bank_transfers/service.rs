use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use goldenhorse_core::{AppError, ListResult};
use goldenhorse_db::filter::{FieldFilter, ResourceTable};
use goldenhorse_db::listing::fetch_page;

use super::model::{BankTransfer, BankTransferFilterParams, CreateBankTransferDto};

const BANK_TRANSFERS: ResourceTable = ResourceTable {
    table: "bank_transfers",
    select: "id, reference, bank_name, amount, status, contact_id, transferred_at, created_at",
    search_columns: &["reference", "bank_name"],
    default_order: "created_at DESC",
};

pub struct BankTransferService;

impl BankTransferService {
    #[instrument(skip(db))]
    pub async fn create(
        db: &PgPool,
        dto: CreateBankTransferDto,
    ) -> Result<BankTransfer, AppError> {
        let transfer = sqlx::query_as::<_, BankTransfer>(
            r#"
            INSERT INTO bank_transfers (reference, bank_name, amount, status, contact_id, transferred_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, reference, bank_name, amount, status, contact_id, transferred_at, created_at
            "#,
        )
        .bind(&dto.reference)
        .bind(&dto.bank_name)
        .bind(dto.amount)
        .bind(dto.status.as_deref().unwrap_or("pending"))
        .bind(dto.contact_id)
        .bind(dto.transferred_at)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::bad_request(anyhow::anyhow!(
                    "A transfer with this reference already exists"
                ));
            }
            AppError::from(e)
        })?;

        Ok(transfer)
    }

    #[instrument(skip(db))]
    pub async fn list(
        db: &PgPool,
        params: BankTransferFilterParams,
    ) -> Result<ListResult<BankTransfer>, AppError> {
        let mut filters = Vec::new();
        if let Some(status) = params.status {
            filters.push(FieldFilter::equals_text("status", status));
        }
        if let Some(contact_id) = params.contact_id {
            filters.push(FieldFilter::equals_uuid("contact_id", contact_id));
        }
        if params.min_amount.is_some() || params.max_amount.is_some() {
            filters.push(FieldFilter::between(
                "amount",
                params.min_amount,
                params.max_amount,
            ));
        }

        fetch_page::<BankTransfer>(db, &BANK_TRANSFERS, &params.list, &filters).await
    }

    #[instrument(skip(db))]
    pub async fn get_by_id(db: &PgPool, id: Uuid) -> Result<BankTransfer, AppError> {
        let transfer = sqlx::query_as::<_, BankTransfer>(
            r#"
            SELECT id, reference, bank_name, amount, status, contact_id, transferred_at, created_at
            FROM bank_transfers WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;

        transfer.ok_or_else(|| AppError::not_found(anyhow::anyhow!("Bank transfer not found")))
    }
}
