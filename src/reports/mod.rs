//! Reports module for GenZ Finance
//!
//! View-models for the dashboard, the transaction list and the savings goals.
//! Each report is generated from storage, renders itself for the terminal and,
//! where a table makes sense, exports CSV.

pub mod dashboard;
pub mod goals;
pub mod transactions;

pub use dashboard::DashboardReport;
pub use goals::GoalsReport;
pub use transactions::TransactionsReport;
