use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use goldenhorse_core::{AppError, ListResult};
use goldenhorse_db::filter::{FieldFilter, ResourceTable};
use goldenhorse_db::listing::fetch_page;

use super::model::{CreateVehicleDto, UpdateVehicleDto, Vehicle, VehicleFilterParams};

const VEHICLES: ResourceTable = ResourceTable {
    table: "vehicles",
    select: "id, plate_number, model, status, capacity_tons, created_at, updated_at",
    search_columns: &["plate_number", "model"],
    default_order: "created_at DESC",
};

pub struct VehicleService;

impl VehicleService {
    #[instrument(skip(db))]
    pub async fn create(db: &PgPool, dto: CreateVehicleDto) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (plate_number, model, status, capacity_tons)
            VALUES ($1, $2, $3, $4)
            RETURNING id, plate_number, model, status, capacity_tons, created_at, updated_at
            "#,
        )
        .bind(&dto.plate_number)
        .bind(&dto.model)
        .bind(dto.status.as_deref().unwrap_or("available"))
        .bind(dto.capacity_tons)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::bad_request(anyhow::anyhow!(
                    "A vehicle with this plate number already exists"
                ));
            }
            AppError::from(e)
        })?;

        Ok(vehicle)
    }

    #[instrument(skip(db))]
    pub async fn list(
        db: &PgPool,
        params: VehicleFilterParams,
    ) -> Result<ListResult<Vehicle>, AppError> {
        let mut filters = Vec::new();
        if let Some(status) = params.status {
            filters.push(FieldFilter::equals_text("status", status));
        }

        fetch_page::<Vehicle>(db, &VEHICLES, &params.list, &filters).await
    }

    #[instrument(skip(db))]
    pub async fn get_by_id(db: &PgPool, id: Uuid) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT id, plate_number, model, status, capacity_tons, created_at, updated_at
            FROM vehicles WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;

        vehicle.ok_or_else(|| AppError::not_found(anyhow::anyhow!("Vehicle not found")))
    }

    #[instrument(skip(db))]
    pub async fn update(db: &PgPool, id: Uuid, dto: UpdateVehicleDto) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles SET
                plate_number = COALESCE($2, plate_number),
                model = COALESCE($3, model),
                status = COALESCE($4, status),
                capacity_tons = COALESCE($5, capacity_tons),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, plate_number, model, status, capacity_tons, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&dto.plate_number)
        .bind(&dto.model)
        .bind(&dto.status)
        .bind(dto.capacity_tons)
        .fetch_optional(db)
        .await?;

        vehicle.ok_or_else(|| AppError::not_found(anyhow::anyhow!("Vehicle not found")))
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Vehicle not found")));
        }

        Ok(())
    }
}
