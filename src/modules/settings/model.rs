use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use goldenhorse_cache::Setting;

#[derive(Debug, Serialize, ToSchema)]
pub struct SettingDto {
    pub category: String,
    pub key: String,
    pub value: String,
}

impl From<Setting> for SettingDto {
    fn from(setting: Setting) -> Self {
        Self {
            category: setting.category,
            key: setting.key,
            value: setting.value,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpsertSettingDto {
    #[validate(length(min = 1, max = 50, message = "category must be 1-50 characters"))]
    pub category: String,
    #[validate(length(min = 1, max = 100, message = "key must be 1-100 characters"))]
    pub key: String,
    #[validate(length(max = 1000, message = "value must be at most 1000 characters"))]
    pub value: String,
}

/// Approval thresholds resolved from the settings store, with configured
/// fallbacks for absent keys.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApprovalsConfig {
    pub invoice_threshold: f64,
    pub transfer_threshold: f64,
    pub discount_limit_percent: f64,
}

/// Alert thresholds resolved from the settings store.
#[derive(Debug, Serialize, ToSchema)]
pub struct AlertConfig {
    pub low_stock_threshold: f64,
    pub overdue_invoice_days: f64,
    pub idle_vehicle_days: f64,
}
