//! Storage layer for GenZ Finance
//!
//! The only persisted state is the profile store. Everything else comes from
//! the built-in sample data set, loaded fresh on every start.

pub mod file_io;
pub mod profile;
pub mod seed;

pub use file_io::{read_json, write_json_atomic};
pub use profile::{ProfileStore, MONTHLY_INCOME_KEY, USER_NAME_KEY};
pub use seed::{sample_data, DataSet};

use tracing::debug;

use crate::config::paths::FinancePaths;
use crate::error::FinanceError;

/// Main storage coordinator
pub struct Storage {
    paths: FinancePaths,
    pub profile: ProfileStore,
    pub data: DataSet,
}

impl Storage {
    /// Create a new Storage instance seeded with the sample data
    pub fn new(paths: FinancePaths) -> Result<Self, FinanceError> {
        paths.ensure_directories()?;

        let data = sample_data();
        data.validate()?;

        Ok(Self {
            profile: ProfileStore::new(paths.profile_file()),
            data,
            paths,
        })
    }

    pub fn paths(&self) -> &FinancePaths {
        &self.paths
    }

    /// Load persisted state from disk
    pub fn load_all(&mut self) -> Result<(), FinanceError> {
        self.profile.load()?;
        debug!(
            entries = self.profile.len(),
            transactions = self.data.transactions.len(),
            goals = self.data.goals.len(),
            "storage loaded"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().join("genz"));
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        assert!(temp_dir.path().join("genz").exists());
        assert!(storage.profile.is_empty());
        assert_eq!(storage.data.transactions.len(), 10);
        assert!(!storage.paths().is_onboarded());
    }

    #[test]
    fn test_load_all_accepts_numeric_income() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.profile_file(),
            r#"{"userName":"Alex","monthlyIncome":1300}"#,
        )
        .unwrap();

        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        assert_eq!(storage.profile.get(USER_NAME_KEY).unwrap().as_deref(), Some("Alex"));
        assert_eq!(storage.profile.get(MONTHLY_INCOME_KEY).unwrap().as_deref(), Some("1300"));
    }
}
