//! Display formatting for terminal output
//!
//! Tables and small text helpers used by the reports.

pub mod goal;
pub mod report;
pub mod transaction;

pub use goal::{format_goal_details, format_goal_table};
pub use report::{
    format_bar, format_expense_breakdown, format_header, format_percentage, format_savings_series,
};
pub use transaction::{
    format_date_groups, format_transaction_row, format_transaction_table, truncate,
    NO_TRANSACTIONS,
};
