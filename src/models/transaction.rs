//! Transaction model
//!
//! A single dated income or expense event. Transactions are seeded at start-up
//! and read-only afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Whether a transaction brings money in or takes it out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    /// Display name ("Coffee Shop", "Freelance Work", ...)
    pub name: String,

    /// Signed amount: income is >= 0, expense is <= 0
    pub amount: Money,

    pub category: String,

    pub date: NaiveDate,

    #[serde(rename = "type")]
    pub kind: TransactionType,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        id: u64,
        name: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
        kind: TransactionType,
    ) -> Self {
        Self {
            id: TransactionId::new(id),
            name: name.into(),
            amount,
            category: category.into(),
            date,
            kind,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Amount with a leading +/- as shown in the transaction list
    pub fn signed_display(&self) -> String {
        let sign = if self.is_expense() { "-" } else { "+" };
        format!("{}{}", sign, self.amount.abs())
    }

    /// Check that the type agrees with the sign of the amount
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.name.trim().is_empty() {
            return Err(TransactionValidationError::MissingName);
        }

        match self.kind {
            TransactionType::Income if self.amount.is_negative() => {
                Err(TransactionValidationError::NegativeIncome(self.amount))
            }
            TransactionType::Expense if self.amount.is_positive() => {
                Err(TransactionValidationError::PositiveExpense(self.amount))
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.name,
            self.signed_display(),
            self.category
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    MissingName,
    NegativeIncome(Money),
    PositiveExpense(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => write!(f, "Transaction name is required"),
            Self::NegativeIncome(amount) => {
                write!(f, "Income transaction has a negative amount: {}", amount)
            }
            Self::PositiveExpense(amount) => {
                write!(f, "Expense transaction has a positive amount: {}", amount)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
