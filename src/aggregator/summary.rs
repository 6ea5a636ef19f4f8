//! Income/expense summary and the dashboard figures derived from it

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{CategoryExpense, Money, Transaction};

/// Savings rate at or above which the savings card trends up
pub const TREND_UP_RATE: f64 = 20.0;

/// Income versus spending for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeExpenseSummary {
    pub income: Money,
    pub total_expenses: Money,
    /// `income - total_expenses`, negative when overspending
    pub total_savings: Money,
    /// Percent of income saved, one decimal place; 0 when income is not positive
    pub savings_rate: f64,
}

impl IncomeExpenseSummary {
    /// The savings rate as shown on the savings card ("12.5")
    pub fn savings_rate_display(&self) -> String {
        format!("{:.1}", self.savings_rate)
    }
}

/// Summarize a month of spending against income
pub fn compute_income_expense_summary(
    income: Money,
    expenses: &[CategoryExpense],
) -> IncomeExpenseSummary {
    let total_expenses: Money = expenses.iter().map(|e| e.amount).sum();
    let total_savings = income.saturating_sub(total_expenses);

    let savings_rate = if income.is_positive() {
        round_one_decimal(total_savings.as_f64() / income.as_f64() * 100.0)
    } else {
        0.0
    };

    IncomeExpenseSummary {
        income,
        total_expenses,
        total_savings,
        savings_rate,
    }
}

/// Round to one decimal place, folding -0.0 into 0.0
pub(crate) fn round_one_decimal(value: f64) -> f64 {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Direction indicator on the savings card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SavingsTrend {
    Up,
    Down,
}

impl SavingsTrend {
    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::Down => "↓",
        }
    }
}

pub fn savings_trend(savings_rate: f64) -> SavingsTrend {
    if savings_rate >= TREND_UP_RATE {
        SavingsTrend::Up
    } else {
        SavingsTrend::Down
    }
}

/// Income and spending totals over a whole ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionTotals {
    pub total_income: Money,
    /// Sum of expense magnitudes (non-negative)
    pub total_expenses: Money,
}

/// Totals over every transaction, ignoring any active filter or search
pub fn compute_transaction_totals(transactions: &[Transaction]) -> TransactionTotals {
    transactions.iter().fold(
        TransactionTotals {
            total_income: Money::zero(),
            total_expenses: Money::zero(),
        },
        |mut totals, txn| {
            if txn.is_income() {
                totals.total_income += txn.amount;
            } else {
                totals.total_expenses += txn.amount.abs();
            }
            totals
        },
    )
}

/// One slice of the expense breakdown chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSlice {
    pub category: String,
    pub amount: Money,
    /// Share of total expenses in percent
    pub percent: f64,
}

/// Category shares of total spending, in input order
pub fn expense_breakdown(expenses: &[CategoryExpense]) -> Vec<ExpenseSlice> {
    let total: Money = expenses.iter().map(|e| e.amount).sum();

    expenses
        .iter()
        .map(|e| ExpenseSlice {
            category: e.category.clone(),
            amount: e.amount,
            percent: if total.is_zero() {
                0.0
            } else {
                e.amount.as_f64() / total.as_f64() * 100.0
            },
        })
        .collect()
}

/// The first `limit` transactions of an already newest-first ledger
pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> &[Transaction] {
    &transactions[..limit.min(transactions.len())]
}

/// Days left in the month after `today` (0 on the last day)
pub fn days_until_month_end(today: NaiveDate) -> i64 {
    let (year, month) = if today.month() == 12 {
        (today.year() + 1, 1)
    } else {
        (today.year(), today.month() + 1)
    };

    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|next_month| next_month.signed_duration_since(today).num_days() - 1)
        .unwrap_or(0)
}
