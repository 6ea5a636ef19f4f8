//! Custom error types for GenZ Finance
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for GenZ Finance operations
#[derive(Error, Debug)]
pub enum FinanceError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models and user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A savings goal that cannot be measured (target must be positive)
    #[error("Invalid goal '{goal}': {reason}")]
    InvalidGoal { goal: String, reason: String },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl FinanceError {
    /// Create an "invalid goal" error
    pub fn invalid_goal(goal: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidGoal {
            goal: goal.into(),
            reason: reason.into(),
        }
    }

    /// Create a "not found" error for goals
    pub fn goal_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Goal",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an invalid goal error
    pub fn is_invalid_goal(&self) -> bool {
        matches!(self, Self::InvalidGoal { .. })
    }
}

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for GenZ Finance operations
pub type FinanceResult<T> = Result<T, FinanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FinanceError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_goal_error() {
        let err = FinanceError::invalid_goal("Vacation Fund", "target must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid goal 'Vacation Fund': target must be positive"
        );
        assert!(err.is_invalid_goal());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_not_found_error() {
        let err = FinanceError::goal_not_found("goal-7");
        assert_eq!(err.to_string(), "Goal not found: goal-7");
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FinanceError = io_err.into();
        assert!(matches!(err, FinanceError::Io(_)));
    }
}
