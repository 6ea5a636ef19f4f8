//! Dashboard Report
//!
//! Monthly overview: income against category expenses, the savings insight,
//! the savings series and the most recent transactions.

use chrono::NaiveDate;
use serde::Serialize;

use crate::aggregator::{
    classify_savings_insight, compute_income_expense_summary, days_until_month_end,
    expense_breakdown, recent_transactions, savings_trend, ExpenseSlice, IncomeExpenseSummary,
    SavingsInsight, SavingsTrend,
};
use crate::config::Settings;
use crate::display::{format_expense_breakdown, format_savings_series, format_transaction_row};
use crate::error::FinanceResult;
use crate::models::{MonthlySavingsPoint, Transaction};
use crate::services::ProfileService;
use crate::storage::Storage;

/// Dashboard Report
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    /// Name used in the greeting
    pub user_name: String,
    pub summary: IncomeExpenseSummary,
    pub insight: SavingsInsight,
    pub trend: SavingsTrend,
    pub breakdown: Vec<ExpenseSlice>,
    pub monthly_savings: Vec<MonthlySavingsPoint>,
    pub recent_transactions: Vec<Transaction>,
    /// Days left in the current month, counted from `as_of`
    pub days_until_month_end: i64,
    pub as_of: NaiveDate,
}

impl DashboardReport {
    /// Generate the dashboard for `today`
    pub fn generate(
        storage: &Storage,
        settings: &Settings,
        today: NaiveDate,
    ) -> FinanceResult<Self> {
        let profile = ProfileService::new(storage).load()?;
        let data = &storage.data;

        let summary = compute_income_expense_summary(profile.monthly_income, &data.expenses);
        let insight = classify_savings_insight(summary.savings_rate);
        let trend = savings_trend(summary.savings_rate);

        Ok(Self {
            user_name: profile.name,
            insight,
            trend,
            breakdown: expense_breakdown(&data.expenses),
            monthly_savings: data.monthly_savings.clone(),
            recent_transactions: recent_transactions(
                &data.recent_transactions,
                settings.recent_transactions_limit,
            )
            .to_vec(),
            days_until_month_end: days_until_month_end(today),
            as_of: today,
            summary,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Hey {}! 👋\n", self.user_name));
        output.push_str(&format!("Dashboard as of {}\n", self.as_of));
        output.push_str(&"=".repeat(80));
        output.push('\n');

        output.push_str(&format!(
            "{:<20} {:>14}\n",
            "Monthly Income:", self.summary.income
        ));
        output.push_str(&format!(
            "{:<20} {:>14}\n",
            "Total Expenses:", self.summary.total_expenses
        ));
        output.push_str(&format!(
            "{:<20} {:>14}  {} {}% savings rate\n",
            "Total Savings:",
            self.summary.total_savings,
            self.trend.arrow(),
            self.summary.savings_rate_display()
        ));
        output.push_str(&format!(
            "{:<20} {:>14}\n\n",
            "Remaining Days:", self.days_until_month_end
        ));

        output.push_str(&format!(
            "{} ({})\n",
            self.insight.title, self.insight.tier
        ));
        output.push_str(&self.insight.message);
        output.push_str("\n\n");

        output.push_str("EXPENSE BREAKDOWN\n");
        output.push_str(&format_expense_breakdown(&self.breakdown));
        output.push('\n');

        output.push_str("SAVINGS TREND\n");
        output.push_str(&format_savings_series(&self.monthly_savings));
        output.push('\n');

        output.push_str("RECENT TRANSACTIONS\n");
        output.push_str(&"-".repeat(80));
        output.push('\n');
        if self.recent_transactions.is_empty() {
            output.push_str("No recent transactions.\n");
        }
        for txn in &self.recent_transactions {
            output.push_str(&format_transaction_row(txn));
            output.push('\n');
        }

        output
    }
}
