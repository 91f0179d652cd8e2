use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use goldenhorse_core::ListParams;

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BankTransfer {
    pub id: Uuid,
    pub reference: String,
    pub bank_name: String,
    pub amount: f64,
    pub status: String,
    pub contact_id: Option<Uuid>,
    pub transferred_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBankTransferDto {
    #[validate(length(min = 1, max = 100, message = "reference must be 1-100 characters"))]
    pub reference: String,
    #[validate(length(min = 1, max = 100, message = "bank_name must be 1-100 characters"))]
    pub bank_name: String,
    #[validate(range(min = 0.0, message = "amount must not be negative"))]
    pub amount: f64,
    /// Defaults to `pending` when omitted.
    pub status: Option<String>,
    pub contact_id: Option<Uuid>,
    pub transferred_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct BankTransferFilterParams {
    pub status: Option<String>,
    pub contact_id: Option<Uuid>,
    #[serde(default, deserialize_with = "goldenhorse_core::serde::deserialize_optional_f64")]
    pub min_amount: Option<f64>,
    #[serde(default, deserialize_with = "goldenhorse_core::serde::deserialize_optional_f64")]
    pub max_amount: Option<f64>,
    #[serde(flatten)]
    pub list: ListParams,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::Uri;

    // Flattened list params plus the lenient numeric fields, parsed the
    // way the extractor parses them at request time.
    #[test]
    fn test_filter_params_parse_from_query_string() {
        let uri: Uri =
            "/api/bank-transfers?query=cib&page=2abc&limit=25&status=pending&min_amount=5000&max_amount=bad"
                .parse()
                .unwrap();
        let Query(params) = Query::<BankTransferFilterParams>::try_from_uri(&uri).unwrap();

        assert_eq!(params.list.query(), Some("cib"));
        assert_eq!(params.list.page(), 2);
        assert_eq!(params.list.limit(), 25);
        assert_eq!(params.status.as_deref(), Some("pending"));
        assert_eq!(params.min_amount, Some(5000.0));
        assert_eq!(params.max_amount, None);
    }

    #[test]
    fn test_filter_params_default_on_empty_query_string() {
        let uri: Uri = "/api/bank-transfers".parse().unwrap();
        let Query(params) = Query::<BankTransferFilterParams>::try_from_uri(&uri).unwrap();

        assert_eq!(params.list.query(), None);
        assert_eq!(params.list.page(), 1);
        assert_eq!(params.list.limit(), 10);
        assert!(params.status.is_none());
        assert!(params.min_amount.is_none());
        assert!(params.max_amount.is_none());
    }
}
