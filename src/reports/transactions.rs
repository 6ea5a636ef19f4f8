//! Transactions Report
//!
//! The transaction list: income and expense totals over the whole ledger,
//! followed by the filtered transactions sectioned by date.

use std::io::Write;

use serde::Serialize;

use crate::aggregator::{
    compute_transaction_totals, group_transactions_by_date, DateGroup, TransactionQuery,
    TransactionTotals,
};
use crate::display::{format_date_groups, format_header};
use crate::error::{FinanceError, FinanceResult};
use crate::storage::Storage;

/// Transactions Report
#[derive(Debug, Clone, Serialize)]
pub struct TransactionsReport {
    /// Query the groups were built from
    pub query: TransactionQuery,
    /// Totals over the unfiltered ledger
    pub totals: TransactionTotals,
    pub groups: Vec<DateGroup>,
}

impl TransactionsReport {
    /// Generate the report for a filter/search query
    pub fn generate(storage: &Storage, query: &TransactionQuery) -> FinanceResult<Self> {
        let transactions = &storage.data.transactions;

        Ok(Self {
            query: query.clone(),
            totals: compute_transaction_totals(transactions),
            groups: group_transactions_by_date(transactions, query),
        })
    }

    /// Number of transactions that survived the filter
    pub fn transaction_count(&self) -> usize {
        self.groups.iter().map(|g| g.transactions.len()).sum()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format_header("Transactions", 80));
        output.push('\n');
        output.push_str(&"=".repeat(80));
        output.push('\n');
        output.push_str(&format!("Total Income:   {}\n", self.totals.total_income));
        output.push_str(&format!("Total Expenses: {}\n", self.totals.total_expenses));

        let mut scope = format!("Showing: {}", self.query.filter);
        if !self.query.search.is_empty() {
            scope.push_str(&format!(" matching \"{}\"", self.query.search));
        }
        output.push_str(&scope);
        output.push_str("\n\n");

        output.push_str(&format_date_groups(&self.groups));

        output
    }

    /// Export the filtered transactions to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FinanceResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer
            .write_record(["Date", "Name", "Category", "Type", "Amount"])
            .map_err(|e| FinanceError::Export(e.to_string()))?;

        for group in &self.groups {
            for txn in &group.transactions {
                csv_writer
                    .write_record([
                        txn.date.format("%Y-%m-%d").to_string(),
                        txn.name.clone(),
                        txn.category.clone(),
                        txn.kind.as_str().to_string(),
                        format!("{:.2}", txn.amount.as_f64()),
                    ])
                    .map_err(|e| FinanceError::Export(e.to_string()))?;
            }
        }

        csv_writer
            .flush()
            .map_err(|e| FinanceError::Export(e.to_string()))?;

        Ok(())
    }
}
