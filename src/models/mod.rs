//! Core data models for GenZ Finance
//!
//! Plain, serializable records: transactions, category expenses, the monthly
//! savings series, savings goals and the user profile.

pub mod expense;
pub mod goal;
pub mod ids;
pub mod money;
pub mod profile;
pub mod transaction;

pub use expense::{CategoryExpense, MonthlySavingsPoint};
pub use goal::{GoalValidationError, SavingsGoal};
pub use ids::{GoalId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use profile::{UserProfile, DEFAULT_USER_NAME};
pub use transaction::{Transaction, TransactionType, TransactionValidationError};
