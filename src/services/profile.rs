//! Profile service
//!
//! Reads the profile with defaults for anything missing and records the
//! answers given during onboarding.

use tracing::{debug, info};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Money, UserProfile, DEFAULT_USER_NAME};
use crate::storage::{Storage, MONTHLY_INCOME_KEY, USER_NAME_KEY};

/// Service for the user profile
pub struct ProfileService<'a> {
    storage: &'a Storage,
}

impl<'a> ProfileService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Current profile. Never fails on absent values: an empty or missing name
    /// reads as "User" and a missing, unreadable or negative income as 0.
    pub fn load(&self) -> FinanceResult<UserProfile> {
        let name = match self.storage.profile.get(USER_NAME_KEY)? {
            Some(name) if !name.trim().is_empty() => name,
            _ => {
                debug!(key = USER_NAME_KEY, "profile value missing, using default");
                DEFAULT_USER_NAME.to_string()
            }
        };

        let monthly_income = match self.storage.profile.get(MONTHLY_INCOME_KEY)? {
            Some(raw) => match Money::parse(&raw) {
                Ok(income) if income.is_negative() => {
                    debug!(key = MONTHLY_INCOME_KEY, %income, "negative income, using 0");
                    Money::zero()
                }
                Ok(income) => income,
                Err(e) => {
                    debug!(key = MONTHLY_INCOME_KEY, error = %e, "unreadable income, using 0");
                    Money::zero()
                }
            },
            None => {
                debug!(key = MONTHLY_INCOME_KEY, "profile value missing, using default");
                Money::zero()
            }
        };

        Ok(UserProfile::new(name, monthly_income))
    }

    /// Store name and monthly income
    ///
    /// Both fields are required; income must be a non-negative amount.
    pub fn onboard(&self, name: &str, monthly_income: &str) -> FinanceResult<UserProfile> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FinanceError::Validation("Name is required".into()));
        }

        let raw_income = monthly_income.trim();
        if raw_income.is_empty() {
            return Err(FinanceError::Validation("Monthly income is required".into()));
        }

        let income = Money::parse(raw_income)
            .map_err(|e| FinanceError::Validation(e.to_string()))?;
        if income.is_negative() {
            return Err(FinanceError::Validation(format!(
                "Monthly income cannot be negative: {}",
                income
            )));
        }

        self.storage.profile.set(USER_NAME_KEY, name)?;
        self.storage.profile.set(MONTHLY_INCOME_KEY, raw_income)?;
        self.storage.profile.save()?;

        info!(name, income = %income, "profile saved");
        Ok(UserProfile::new(name, income))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinancePaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_defaults_when_nothing_stored() {
        let (_temp_dir, storage) = create_test_storage();
        let profile = ProfileService::new(&storage).load().unwrap();

        assert_eq!(profile.name, "User");
        assert_eq!(profile.monthly_income, Money::zero());
    }

    #[test]
    fn test_empty_name_and_bad_income_fall_back() {
        let (_temp_dir, storage) = create_test_storage();
        storage.profile.set(USER_NAME_KEY, "  ").unwrap();
        storage.profile.set(MONTHLY_INCOME_KEY, "lots").unwrap();

        let profile = ProfileService::new(&storage).load().unwrap();
        assert_eq!(profile.name, "User");
        assert_eq!(profile.monthly_income, Money::zero());
    }

    #[test]
    fn test_negative_stored_income_reads_as_zero() {
        let (_temp_dir, storage) = create_test_storage();
        storage.profile.set(USER_NAME_KEY, "Alex").unwrap();
        storage.profile.set(MONTHLY_INCOME_KEY, "-92233720368547758.07").unwrap();

        let profile = ProfileService::new(&storage).load().unwrap();
        assert_eq!(profile.name, "Alex");
        assert_eq!(profile.monthly_income, Money::zero());
    }

    #[test]
    fn test_onboard_round_trip() {
        let (temp_dir, storage) = create_test_storage();
        let service = ProfileService::new(&storage);

        let profile = service.onboard(" Alex ", "1300").unwrap();
        assert_eq!(profile.name, "Alex");
        assert_eq!(profile.monthly_income, Money::from_whole(1300));

        // Fresh storage sees the persisted values
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut reopened = Storage::new(paths).unwrap();
        reopened.load_all().unwrap();
        let loaded = ProfileService::new(&reopened).load().unwrap();
        assert_eq!(loaded, profile);
    }

    #[test]
    fn test_onboard_requires_both_fields() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ProfileService::new(&storage);

        assert!(service.onboard("", "1300").unwrap_err().is_validation());
        assert!(service.onboard("Alex", " ").unwrap_err().is_validation());
        assert!(storage.profile.is_empty());
    }

    #[test]
    fn test_onboard_rejects_bad_income() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ProfileService::new(&storage);

        assert!(service.onboard("Alex", "abc").unwrap_err().is_validation());
        assert!(service.onboard("Alex", "-50").unwrap_err().is_validation());
        assert!(!storage.paths().is_onboarded());
    }
}
