//! Savings goal progress
//!
//! A goal whose saved amount exceeds its target is treated as overachieved,
//! not as bad data: the percentage is clamped to 100 and the remaining amount
//! to zero, and the status records the overshoot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{GoalId, Money, SavingsGoal};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    InProgress,
    Reached,
    Overachieved,
}

/// Derived progress figures for one goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub goal_id: GoalId,
    pub name: String,
    pub category: String,
    pub target: Money,
    pub current: Money,
    pub deadline: NaiveDate,
    /// `current / target * 100`, capped at 100
    pub progress_percent: f64,
    /// Whole days until the deadline, never negative
    pub days_remaining: i64,
    /// `target - current`, never negative
    pub remaining_amount: Money,
    pub status: GoalStatus,
}

/// Compute progress for a goal as of `today`
///
/// # Errors
///
/// Returns `FinanceError::InvalidGoal` when the target is zero or negative.
pub fn compute_goal_progress(goal: &SavingsGoal, today: NaiveDate) -> FinanceResult<GoalProgress> {
    let progress_percent = progress_percent(goal)?;

    let days_remaining = goal.deadline.signed_duration_since(today).num_days().max(0);
    let remaining_amount = (goal.target - goal.current).max(Money::zero());

    let status = match goal.current.cmp(&goal.target) {
        std::cmp::Ordering::Less => GoalStatus::InProgress,
        std::cmp::Ordering::Equal => GoalStatus::Reached,
        std::cmp::Ordering::Greater => GoalStatus::Overachieved,
    };

    Ok(GoalProgress {
        goal_id: goal.id,
        name: goal.name.clone(),
        category: goal.category.clone(),
        target: goal.target,
        current: goal.current,
        deadline: goal.deadline,
        progress_percent,
        days_remaining,
        remaining_amount,
        status,
    })
}

/// Progress for every goal, failing on the first goal with a bad target
pub fn compute_all_goal_progress(
    goals: &[SavingsGoal],
    today: NaiveDate,
) -> FinanceResult<Vec<GoalProgress>> {
    goals
        .iter()
        .map(|goal| compute_goal_progress(goal, today))
        .collect()
}

fn progress_percent(goal: &SavingsGoal) -> FinanceResult<f64> {
    if !goal.target.is_positive() {
        return Err(FinanceError::invalid_goal(
            &goal.name,
            format!("target must be positive, got {}", goal.target),
        ));
    }

    Ok((goal.current.as_f64() / goal.target.as_f64() * 100.0).min(100.0))
}

/// Totals across all goals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalStats {
    pub total_target: Money,
    pub total_saved: Money,
    pub goal_count: usize,
}

pub fn compute_aggregate_goal_stats(goals: &[SavingsGoal]) -> GoalStats {
    GoalStats {
        total_target: goals.iter().map(|g| g.target).sum(),
        total_saved: goals.iter().map(|g| g.current).sum(),
        goal_count: goals.len(),
    }
}

/// One slice of the goals chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSlice {
    pub name: String,
    pub percentage: f64,
}

pub fn goal_chart_series(goals: &[SavingsGoal]) -> FinanceResult<Vec<GoalSlice>> {
    goals
        .iter()
        .map(|goal| {
            Ok(GoalSlice {
                name: goal.name.clone(),
                percentage: progress_percent(goal)?,
            })
        })
        .collect()
}
