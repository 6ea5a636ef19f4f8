//! JSON Export functionality
//!
//! Snapshot of everything the application shows, with schema versioning.

use std::io::Write;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::aggregator::{
    classify_savings_insight, compute_aggregate_goal_stats, compute_all_goal_progress,
    compute_income_expense_summary, compute_transaction_totals, GoalProgress, GoalStats,
    IncomeExpenseSummary, SavingsInsight, TransactionTotals,
};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{CategoryExpense, MonthlySavingsPoint, Transaction, UserProfile};
use crate::services::ProfileService;
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Dashboard figures as of the export date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub summary: IncomeExpenseSummary,
    pub insight: SavingsInsight,
    pub expenses: Vec<CategoryExpense>,
    pub monthly_savings: Vec<MonthlySavingsPoint>,
}

/// Full export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinanceExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Date that day counts were computed against
    pub as_of: NaiveDate,

    pub profile: UserProfile,

    pub dashboard: DashboardSnapshot,

    /// Full ledger, newest first
    pub transactions: Vec<Transaction>,

    pub transaction_totals: TransactionTotals,

    pub goals: Vec<GoalProgress>,

    pub goal_stats: GoalStats,
}

impl FinanceExport {
    /// Build an export from storage
    pub fn from_storage(storage: &Storage, today: NaiveDate) -> FinanceResult<Self> {
        let profile = ProfileService::new(storage).load()?;
        let data = &storage.data;

        let summary = compute_income_expense_summary(profile.monthly_income, &data.expenses);
        let insight = classify_savings_insight(summary.savings_rate);

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            as_of: today,
            profile,
            dashboard: DashboardSnapshot {
                summary,
                insight,
                expenses: data.expenses.clone(),
                monthly_savings: data.monthly_savings.clone(),
            },
            transactions: data.transactions.clone(),
            transaction_totals: compute_transaction_totals(&data.transactions),
            goals: compute_all_goal_progress(&data.goals, today)?,
            goal_stats: compute_aggregate_goal_stats(&data.goals),
        })
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        for txn in &self.transactions {
            txn.validate()
                .map_err(|e| format!("Transaction {}: {}", txn.id, e))?;
        }

        if self.goal_stats.goal_count != self.goals.len() {
            return Err(format!(
                "Goal count mismatch: stats say {}, found {}",
                self.goal_stats.goal_count,
                self.goals.len()
            ));
        }

        Ok(())
    }
}

/// Export everything to JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    today: NaiveDate,
    writer: &mut W,
    pretty: bool,
) -> FinanceResult<()> {
    let export = FinanceExport::from_storage(storage, today)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| FinanceError::Export(e.to_string()))?;

    Ok(())
}

/// Read a JSON export back (for verification)
pub fn import_from_json(json_str: &str) -> FinanceResult<FinanceExport> {
    let export: FinanceExport = serde_json::from_str(json_str)?;

    export.validate().map_err(FinanceError::Validation)?;

    Ok(export)
}
