//! YAML Export functionality
//!
//! Same snapshot as the JSON export, in a human-readable form.

use std::io::Write;

use chrono::NaiveDate;

use crate::error::{FinanceError, FinanceResult};
use crate::export::json::FinanceExport;
use crate::storage::Storage;

/// Export everything to YAML
pub fn export_full_yaml<W: Write>(
    storage: &Storage,
    today: NaiveDate,
    writer: &mut W,
) -> FinanceResult<()> {
    let export = FinanceExport::from_storage(storage, today)?;

    writeln!(writer, "# GenZ Finance Export")
        .map_err(|e| FinanceError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| FinanceError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| FinanceError::Export(e.to_string()))?;
    writeln!(writer, "# Amounts are in cents.")
        .map_err(|e| FinanceError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FinanceError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| FinanceError::Export(e.to_string()))?;

    Ok(())
}
