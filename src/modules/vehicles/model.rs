use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use goldenhorse_core::ListParams;

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Vehicle {
    pub id: Uuid,
    pub plate_number: String,
    pub model: String,
    pub status: String,
    pub capacity_tons: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateVehicleDto {
    #[validate(length(min = 1, max = 20, message = "plate_number must be 1-20 characters"))]
    pub plate_number: String,
    #[validate(length(min = 1, max = 100, message = "model must be 1-100 characters"))]
    pub model: String,
    /// Defaults to `available` when omitted.
    pub status: Option<String>,
    #[validate(range(min = 0.0, message = "capacity_tons must not be negative"))]
    pub capacity_tons: Option<f64>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateVehicleDto {
    #[validate(length(min = 1, max = 20, message = "plate_number must be 1-20 characters"))]
    pub plate_number: Option<String>,
    #[validate(length(min = 1, max = 100, message = "model must be 1-100 characters"))]
    pub model: Option<String>,
    pub status: Option<String>,
    #[validate(range(min = 0.0, message = "capacity_tons must not be negative"))]
    pub capacity_tons: Option<f64>,
}

#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct VehicleFilterParams {
    pub status: Option<String>,
    #[serde(flatten)]
    pub list: ListParams,
}
