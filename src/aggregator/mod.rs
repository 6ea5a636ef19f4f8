//! Financial aggregator
//!
//! Pure functions turning transactions, category expenses and savings goals
//! into the figures the dashboard, transaction list and goals pages show.
//! Nothing here reads the clock, the filesystem or settings: every input,
//! including "today" and the list filter, is an argument.

pub mod goals;
pub mod grouping;
pub mod insight;
pub mod summary;

pub use goals::{
    compute_aggregate_goal_stats, compute_all_goal_progress, compute_goal_progress,
    goal_chart_series, GoalProgress, GoalSlice, GoalStats, GoalStatus,
};
pub use grouping::{
    filter_transactions, group_transactions_by_date, BucketOrder, DateGroup, TransactionFilter,
    TransactionQuery,
};
pub use insight::{
    classify_savings_insight, InsightRule, InsightTier, SavingsInsight, INSIGHT_RULES,
};
pub use summary::{
    compute_income_expense_summary, compute_transaction_totals, days_until_month_end,
    expense_breakdown, recent_transactions, savings_trend, ExpenseSlice, IncomeExpenseSummary,
    SavingsTrend, TransactionTotals,
};
