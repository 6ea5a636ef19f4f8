//! Built-in sample data
//!
//! Every page starts from this fixed data set; nothing here is persisted.
//! Ledgers are listed newest first, which is the order the transaction list
//! relies on for its date sections.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{
    CategoryExpense, Money, MonthlySavingsPoint, SavingsGoal, Transaction, TransactionType,
};

/// All records the application works from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSet {
    /// This month's spending per category
    pub expenses: Vec<CategoryExpense>,
    /// Savings per month, oldest first
    pub monthly_savings: Vec<MonthlySavingsPoint>,
    /// The short list shown on the dashboard
    pub recent_transactions: Vec<Transaction>,
    /// The full transaction history
    pub transactions: Vec<Transaction>,
    pub goals: Vec<SavingsGoal>,
}

impl DataSet {
    /// Check the sign/type invariant of every transaction and every goal
    pub fn validate(&self) -> FinanceResult<()> {
        for txn in self.recent_transactions.iter().chain(&self.transactions) {
            txn.validate().map_err(|e| {
                FinanceError::Validation(format!("Transaction {}: {}", txn.id, e))
            })?;
        }

        for goal in &self.goals {
            goal.validate()
                .map_err(|e| FinanceError::Validation(format!("Goal {}: {}", goal.id, e)))?;
        }

        Ok(())
    }
}

/// The sample data set
pub fn sample_data() -> DataSet {
    DataSet {
        expenses: sample_expenses(),
        monthly_savings: sample_monthly_savings(),
        recent_transactions: sample_ledger().into_iter().take(4).collect(),
        transactions: sample_ledger(),
        goals: sample_goals(),
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    // Only called with literal calendar dates below
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn sample_expenses() -> Vec<CategoryExpense> {
    vec![
        CategoryExpense::new("Food", Money::from_whole(450)),
        CategoryExpense::new("Transport", Money::from_whole(120)),
        CategoryExpense::new("Entertainment", Money::from_whole(200)),
        CategoryExpense::new("Shopping", Money::from_whole(350)),
        CategoryExpense::new("Bills", Money::from_whole(180)),
    ]
}

fn sample_monthly_savings() -> Vec<MonthlySavingsPoint> {
    [
        ("Jan", 1200),
        ("Feb", 1500),
        ("Mar", 1100),
        ("Apr", 1800),
        ("May", 1600),
        ("Jun", 1400),
    ]
    .into_iter()
    .map(|(month, savings)| MonthlySavingsPoint::new(month, Money::from_whole(savings)))
    .collect()
}

fn sample_ledger() -> Vec<Transaction> {
    use TransactionType::{Expense, Income};

    // (name, cents, category, day of March 2024, type)
    [
        ("Coffee Shop", -850, "Food", 15, Expense),
        ("Freelance Work", 50_000, "Income", 14, Income),
        ("Uber Ride", -1500, "Transport", 14, Expense),
        ("Grocery Shopping", -8550, "Food", 13, Expense),
        ("Netflix Subscription", -1599, "Bills", 12, Expense),
        ("Part-time Job", 30_000, "Income", 10, Income),
        ("Restaurant", -4500, "Food", 10, Expense),
        ("Movie Tickets", -2400, "Entertainment", 9, Expense),
        ("Amazon Purchase", -6799, "Shopping", 8, Expense),
        ("Tutoring Session", -5000, "Education", 7, Expense),
    ]
    .into_iter()
    .zip(1u64..)
    .map(|((name, cents, category, day, kind), id)| {
        Transaction::new(
            id,
            name,
            Money::from_cents(cents),
            category,
            date(2024, 3, day),
            kind,
        )
    })
    .collect()
}

fn sample_goals() -> Vec<SavingsGoal> {
    [
        ("Vacation Fund", 2000, 1500, date(2024, 6, 1), "Travel"),
        ("Emergency Fund", 5000, 3200, date(2024, 12, 31), "Emergency"),
        ("New Laptop", 1500, 800, date(2024, 8, 15), "Gadgets"),
    ]
    .into_iter()
    .zip(1u64..)
    .map(|((name, target, current, deadline, category), id)| {
        SavingsGoal::new(
            id,
            name,
            Money::from_whole(target),
            Money::from_whole(current),
            deadline,
            category,
        )
    })
    .collect()
}
