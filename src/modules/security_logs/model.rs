use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use goldenhorse_core::ListParams;

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SecurityLog {
    pub id: Uuid,
    pub actor: String,
    pub action: String,
    pub message: Option<String>,
    pub level: String,
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSecurityLogDto {
    #[validate(length(min = 1, max = 100, message = "actor must be 1-100 characters"))]
    pub actor: String,
    #[validate(length(min = 1, max = 100, message = "action must be 1-100 characters"))]
    pub action: String,
    pub message: Option<String>,
    /// Defaults to `info` when omitted.
    pub level: Option<String>,
    pub ip_address: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct SecurityLogFilterParams {
    pub level: Option<String>,
    pub actor: Option<String>,
    #[serde(flatten)]
    pub list: ListParams,
}
