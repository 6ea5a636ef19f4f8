//! Export module for GenZ Finance
//!
//! Provides data export in multiple formats:
//! - CSV: the transaction ledger (spreadsheet-compatible)
//! - JSON: machine-readable full snapshot
//! - YAML: human-readable full snapshot

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_transactions_csv;
pub use json::{
    export_full_json, import_from_json, DashboardSnapshot, FinanceExport, EXPORT_SCHEMA_VERSION,
};
pub use yaml::export_full_yaml;
