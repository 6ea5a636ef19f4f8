//! GenZ Finance - personal finance summaries from the command line
//!
//! This library provides the core functionality for the `genz` application:
//! monthly income/expense summaries, savings advice, a searchable transaction
//! history grouped by day, and savings goal tracking.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `aggregator`: Pure calculations (summary, insight, grouping, goals)
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, goals, profile)
//! - `storage`: Profile persistence and the built-in data set
//! - `services`: Business logic layer
//! - `reports`: Dashboard, transaction and goal view-models
//! - `display`: Terminal tables and formatting helpers
//! - `export`: JSON, YAML and CSV export
//! - `cli`: Command handlers for the `genz` binary
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use genz_finance::aggregator::compute_income_expense_summary;
//! use genz_finance::storage::sample_data;
//! use genz_finance::models::Money;
//!
//! let data = sample_data();
//! let summary = compute_income_expense_summary(Money::from_whole(5000), &data.expenses);
//! assert_eq!(summary.savings_rate, 74.0);
//! ```

pub mod aggregator;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FinanceError, FinanceResult};
