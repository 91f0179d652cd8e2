use std::env;

fn env_f64(name: &str, default: f64) -> f64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Default numeric thresholds, used as fallbacks when the corresponding
/// setting is absent from the settings store.
///
/// # Environment Variables
///
/// - `APPROVALS_INVOICE_THRESHOLD` (default: `25000`)
/// - `APPROVALS_TRANSFER_THRESHOLD` (default: `50000`)
/// - `APPROVALS_DISCOUNT_LIMIT_PERCENT` (default: `10`)
/// - `ALERTS_LOW_STOCK_THRESHOLD` (default: `10`)
/// - `ALERTS_OVERDUE_INVOICE_DAYS` (default: `30`)
/// - `ALERTS_IDLE_VEHICLE_DAYS` (default: `14`)
#[derive(Clone, Debug)]
pub struct ThresholdConfig {
    pub invoice_threshold: f64,
    pub transfer_threshold: f64,
    pub discount_limit_percent: f64,
    pub low_stock_threshold: f64,
    pub overdue_invoice_days: f64,
    pub idle_vehicle_days: f64,
}

impl ThresholdConfig {
    pub fn from_env() -> Self {
        Self {
            invoice_threshold: env_f64("APPROVALS_INVOICE_THRESHOLD", 25000.0),
            transfer_threshold: env_f64("APPROVALS_TRANSFER_THRESHOLD", 50000.0),
            discount_limit_percent: env_f64("APPROVALS_DISCOUNT_LIMIT_PERCENT", 10.0),
            low_stock_threshold: env_f64("ALERTS_LOW_STOCK_THRESHOLD", 10.0),
            overdue_invoice_days: env_f64("ALERTS_OVERDUE_INVOICE_DAYS", 30.0),
            idle_vehicle_days: env_f64("ALERTS_IDLE_VEHICLE_DAYS", 14.0),
        }
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            invoice_threshold: 25000.0,
            transfer_threshold: 50000.0,
            discount_limit_percent: 10.0,
            low_stock_threshold: 10.0,
            overdue_invoice_days: 30.0,
            idle_vehicle_days: 14.0,
        }
    }
}
