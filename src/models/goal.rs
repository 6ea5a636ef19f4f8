//! Savings goal model
//!
//! A named savings target with a deadline. `current` may legitimately exceed
//! `target`; progress figures are clamped when derived, never on the record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;

/// A savings goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: GoalId,
    pub name: String,
    pub target: Money,
    pub current: Money,
    pub deadline: NaiveDate,
    pub category: String,
}

impl SavingsGoal {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        target: Money,
        current: Money,
        deadline: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: GoalId::new(id),
            name: name.into(),
            target,
            current,
            deadline,
            category: category.into(),
        }
    }

    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::MissingName);
        }

        if self.target.is_negative() {
            return Err(GoalValidationError::NegativeTarget);
        }

        if self.target.is_zero() {
            return Err(GoalValidationError::ZeroTarget);
        }

        if self.current.is_negative() {
            return Err(GoalValidationError::NegativeCurrent);
        }

        Ok(())
    }
}

impl fmt::Display for SavingsGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} / {} by {}",
            self.name,
            self.current,
            self.target,
            self.deadline.format("%Y-%m-%d")
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    MissingName,
    NegativeTarget,
    ZeroTarget,
    NegativeCurrent,
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => write!(f, "Goal name is required"),
            Self::NegativeTarget => write!(f, "Goal target cannot be negative"),
            Self::ZeroTarget => write!(f, "Goal target cannot be zero"),
            Self::NegativeCurrent => write!(f, "Saved amount cannot be negative"),
        }
    }
}

impl std::error::Error for GoalValidationError {}
