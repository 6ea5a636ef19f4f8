//! Per-category expense totals and the monthly savings series

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Total spent in one category for the current period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryExpense {
    pub category: String,
    pub amount: Money,
}

impl CategoryExpense {
    pub fn new(category: impl Into<String>, amount: Money) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }
}

/// One point of the month-by-month savings chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySavingsPoint {
    /// Short month label ("Jan")
    pub month: String,
    pub savings: Money,
}

impl MonthlySavingsPoint {
    pub fn new(month: impl Into<String>, savings: Money) -> Self {
        Self {
            month: month.into(),
            savings,
        }
    }
}
