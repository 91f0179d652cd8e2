pub mod bank_transfers;
pub mod contacts;
pub mod ops;
pub mod security_logs;
pub mod settings;
pub mod tickets;
pub mod vehicles;
pub mod warehouses;
