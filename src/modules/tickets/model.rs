use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use goldenhorse_core::ListParams;

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Ticket {
    pub id: Uuid,
    pub subject: String,
    pub body: Option<String>,
    pub status: String,
    pub priority: String,
    pub contact_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTicketDto {
    #[validate(length(min = 1, max = 200, message = "subject must be 1-200 characters"))]
    pub subject: String,
    pub body: Option<String>,
    /// Defaults to `normal` when omitted.
    pub priority: Option<String>,
    pub contact_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTicketStatusDto {
    #[validate(length(min = 1, max = 50, message = "status must be 1-50 characters"))]
    pub status: String,
}

#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct TicketFilterParams {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub contact_id: Option<Uuid>,
    #[serde(flatten)]
    pub list: ListParams,
}
