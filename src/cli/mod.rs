//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the reports and services.

pub mod export;
pub mod profile;
pub mod report;

pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use profile::{handle_onboard_command, handle_profile_command, OnboardArgs};
pub use report::{
    handle_dashboard_command, handle_goals_command, handle_insight_command,
    handle_transactions_command, DashboardArgs, GoalsArgs, InsightArgs, TransactionsArgs,
};

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{FinanceError, FinanceResult};

/// Parse an optional `YYYY-MM-DD` argument, defaulting to the local date
pub(crate) fn resolve_date(arg: Option<&str>) -> FinanceResult<NaiveDate> {
    match arg {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
            FinanceError::Validation(format!("Invalid date format: {}. Use YYYY-MM-DD", s))
        }),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

pub(crate) fn create_output_file(path: &Path) -> FinanceResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        FinanceError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
