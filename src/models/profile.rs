//! User profile captured during onboarding

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Name used when no profile name has been stored
pub const DEFAULT_USER_NAME: &str = "User";

/// The two persisted profile fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub monthly_income: Money,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, monthly_income: Money) -> Self {
        Self {
            name: name.into(),
            monthly_income,
        }
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: DEFAULT_USER_NAME.to_string(),
            monthly_income: Money::zero(),
        }
    }
}
