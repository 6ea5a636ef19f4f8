//! CSV Export functionality
//!
//! Spreadsheet-friendly dump of the transaction ledger. Goal progress is
//! exported by the goals report.

use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::storage::Storage;

fn export_err(e: csv::Error) -> FinanceError {
    FinanceError::Export(e.to_string())
}

/// Export all transactions to CSV
pub fn export_transactions_csv<W: Write>(storage: &Storage, writer: &mut W) -> FinanceResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["ID", "Date", "Name", "Category", "Type", "Amount"])
        .map_err(export_err)?;

    for txn in &storage.data.transactions {
        csv_writer
            .write_record([
                txn.id.to_string(),
                txn.date.format("%Y-%m-%d").to_string(),
                txn.name.clone(),
                txn.category.clone(),
                txn.kind.as_str().to_string(),
                format!("{:.2}", txn.amount.as_f64()),
            ])
            .map_err(export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| FinanceError::Export(e.to_string()))?;
    Ok(())
}
