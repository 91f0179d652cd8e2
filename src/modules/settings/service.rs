use tracing::instrument;

use goldenhorse_cache::SettingsCache;
use goldenhorse_core::AppError;

use crate::config::thresholds::ThresholdConfig;

use super::model::{AlertConfig, ApprovalsConfig, SettingDto, UpsertSettingDto};

pub struct SettingService;

impl SettingService {
    /// Lists all persisted settings, straight from the store (the
    /// administrative view should not be TTL-stale).
    #[instrument(skip(settings))]
    pub async fn list(settings: &SettingsCache) -> Result<Vec<SettingDto>, AppError> {
        let rows = settings.store().find_all().await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Writes a setting. Readers keep seeing the previous snapshot until
    /// the cache TTL elapses; staleness up to the TTL is by contract.
    #[instrument(skip(settings))]
    pub async fn upsert(
        settings: &SettingsCache,
        dto: UpsertSettingDto,
    ) -> Result<SettingDto, AppError> {
        let setting = settings
            .store()
            .upsert(&dto.category, &dto.key, &dto.value)
            .await?;
        Ok(setting.into())
    }

    #[instrument(skip(settings, thresholds))]
    pub async fn approvals(
        settings: &SettingsCache,
        thresholds: &ThresholdConfig,
    ) -> Result<ApprovalsConfig, AppError> {
        Ok(ApprovalsConfig {
            invoice_threshold: settings
                .get_number("APPROVALS.invoiceThreshold", thresholds.invoice_threshold)
                .await?,
            transfer_threshold: settings
                .get_number("APPROVALS.transferThreshold", thresholds.transfer_threshold)
                .await?,
            discount_limit_percent: settings
                .get_number(
                    "APPROVALS.discountLimitPercent",
                    thresholds.discount_limit_percent,
                )
                .await?,
        })
    }

    #[instrument(skip(settings, thresholds))]
    pub async fn alerts(
        settings: &SettingsCache,
        thresholds: &ThresholdConfig,
    ) -> Result<AlertConfig, AppError> {
        Ok(AlertConfig {
            low_stock_threshold: settings
                .get_number("ALERTS.lowStockThreshold", thresholds.low_stock_threshold)
                .await?,
            overdue_invoice_days: settings
                .get_number("ALERTS.overdueInvoiceDays", thresholds.overdue_invoice_days)
                .await?,
            idle_vehicle_days: settings
                .get_number("ALERTS.idleVehicleDays", thresholds.idle_vehicle_days)
                .await?,
        })
    }
}
