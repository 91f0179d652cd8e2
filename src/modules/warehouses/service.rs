use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use goldenhorse_core::{AppError, ListResult};
use goldenhorse_db::filter::{FieldFilter, ResourceTable};
use goldenhorse_db::listing::fetch_page;

use super::model::{CreateWarehouseDto, Warehouse, WarehouseFilterParams};

const WAREHOUSES: ResourceTable = ResourceTable {
    table: "warehouses",
    select: "id, name, city, address, capacity, status, created_at, updated_at",
    search_columns: &["name", "city"],
    default_order: "created_at DESC",
};

pub struct WarehouseService;

impl WarehouseService {
    #[instrument(skip(db))]
    pub async fn create(db: &PgPool, dto: CreateWarehouseDto) -> Result<Warehouse, AppError> {
        let warehouse = sqlx::query_as::<_, Warehouse>(
            r#"
            INSERT INTO warehouses (name, city, address, capacity, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, city, address, capacity, status, created_at, updated_at
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.city)
        .bind(&dto.address)
        .bind(dto.capacity)
        .bind(dto.status.as_deref().unwrap_or("open"))
        .fetch_one(db)
        .await?;

        Ok(warehouse)
    }

    #[instrument(skip(db))]
    pub async fn list(
        db: &PgPool,
        params: WarehouseFilterParams,
    ) -> Result<ListResult<Warehouse>, AppError> {
        let mut filters = Vec::new();
        if let Some(status) = params.status {
            filters.push(FieldFilter::equals_text("status", status));
        }

        fetch_page::<Warehouse>(db, &WAREHOUSES, &params.list, &filters).await
    }

    #[instrument(skip(db))]
    pub async fn get_by_id(db: &PgPool, id: Uuid) -> Result<Warehouse, AppError> {
        let warehouse = sqlx::query_as::<_, Warehouse>(
            r#"
            SELECT id, name, city, address, capacity, status, created_at, updated_at
            FROM warehouses WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;

        warehouse.ok_or_else(|| AppError::not_found(anyhow::anyhow!("Warehouse not found")))
    }
}
