use utoipa::OpenApi;

use goldenhorse_core::{ApiResponse, ListParams, ListResult, Pagination};

use crate::modules::bank_transfers::model::{
    BankTransfer, BankTransferFilterParams, CreateBankTransferDto,
};
use crate::modules::contacts::model::{
    Contact, ContactFilterParams, CreateContactDto, UpdateContactDto,
};
use crate::modules::ops::model::{BackupJob, PerformanceReport, SyncStatus};
use crate::modules::security_logs::model::{
    CreateSecurityLogDto, SecurityLog, SecurityLogFilterParams,
};
use crate::modules::settings::model::{AlertConfig, ApprovalsConfig, SettingDto, UpsertSettingDto};
use crate::modules::tickets::model::{
    CreateTicketDto, Ticket, TicketFilterParams, UpdateTicketStatusDto,
};
use crate::modules::vehicles::model::{
    CreateVehicleDto, UpdateVehicleDto, Vehicle, VehicleFilterParams,
};
use crate::modules::warehouses::model::{CreateWarehouseDto, Warehouse, WarehouseFilterParams};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::settings::controller::get_settings,
        crate::modules::settings::controller::upsert_setting,
        crate::modules::settings::controller::get_approvals_config,
        crate::modules::settings::controller::get_alerts_config,
        crate::modules::contacts::controller::create_contact,
        crate::modules::contacts::controller::get_contacts,
        crate::modules::contacts::controller::get_contact_by_id,
        crate::modules::contacts::controller::update_contact,
        crate::modules::contacts::controller::delete_contact,
        crate::modules::tickets::controller::create_ticket,
        crate::modules::tickets::controller::get_tickets,
        crate::modules::tickets::controller::get_ticket_by_id,
        crate::modules::tickets::controller::update_ticket_status,
        crate::modules::vehicles::controller::create_vehicle,
        crate::modules::vehicles::controller::get_vehicles,
        crate::modules::vehicles::controller::get_vehicle_by_id,
        crate::modules::vehicles::controller::update_vehicle,
        crate::modules::vehicles::controller::delete_vehicle,
        crate::modules::warehouses::controller::create_warehouse,
        crate::modules::warehouses::controller::get_warehouses,
        crate::modules::warehouses::controller::get_warehouse_by_id,
        crate::modules::bank_transfers::controller::create_bank_transfer,
        crate::modules::bank_transfers::controller::get_bank_transfers,
        crate::modules::bank_transfers::controller::get_bank_transfer_by_id,
        crate::modules::security_logs::controller::create_security_log,
        crate::modules::security_logs::controller::get_security_logs,
        crate::modules::ops::controller::get_performance_report,
        crate::modules::ops::controller::get_sync_status,
        crate::modules::ops::controller::run_backup,
    ),
    components(
        schemas(
            SettingDto,
            UpsertSettingDto,
            ApprovalsConfig,
            AlertConfig,
            Contact,
            CreateContactDto,
            UpdateContactDto,
            ContactFilterParams,
            Ticket,
            CreateTicketDto,
            UpdateTicketStatusDto,
            TicketFilterParams,
            Vehicle,
            CreateVehicleDto,
            UpdateVehicleDto,
            VehicleFilterParams,
            Warehouse,
            CreateWarehouseDto,
            WarehouseFilterParams,
            BankTransfer,
            CreateBankTransferDto,
            BankTransferFilterParams,
            SecurityLog,
            CreateSecurityLogDto,
            SecurityLogFilterParams,
            PerformanceReport,
            SyncStatus,
            BackupJob,
            ListParams,
            Pagination,
            ApiResponse<SettingDto>,
            ApiResponse<Vec<SettingDto>>,
            ApiResponse<ApprovalsConfig>,
            ApiResponse<AlertConfig>,
            ApiResponse<Contact>,
            ApiResponse<ListResult<Contact>>,
            ApiResponse<Ticket>,
            ApiResponse<ListResult<Ticket>>,
            ApiResponse<Vehicle>,
            ApiResponse<ListResult<Vehicle>>,
            ApiResponse<Warehouse>,
            ApiResponse<ListResult<Warehouse>>,
            ApiResponse<BankTransfer>,
            ApiResponse<ListResult<BankTransfer>>,
            ApiResponse<SecurityLog>,
            ApiResponse<ListResult<SecurityLog>>,
            ApiResponse<PerformanceReport>,
            ApiResponse<SyncStatus>,
            ApiResponse<BackupJob>,
        )
    ),
    tags(
        (name = "Settings", description = "Runtime configuration and resolved thresholds"),
        (name = "Contacts", description = "Customer and partner contact management"),
        (name = "Tickets", description = "Support ticket tracking"),
        (name = "Vehicles", description = "Fleet vehicle management"),
        (name = "Warehouses", description = "Warehouse registry"),
        (name = "Bank Transfers", description = "Incoming bank transfer records"),
        (name = "Security Logs", description = "Audit trail of sensitive actions"),
        (name = "Ops", description = "Operational reports and maintenance jobs")
    ),
    info(
        title = "Golden Horse Shipping API",
        version = "0.1.0",
        description = "Back-office REST API for the Golden Horse shipping operation, built with Rust, Axum, and PostgreSQL.",
        contact(
            name = "API Support",
            email = "support@goldenhorse-shipping.com"
        ),
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;
