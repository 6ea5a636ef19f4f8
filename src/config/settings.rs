//! User settings for GenZ Finance
//!
//! Dashboard, transaction list and logging preferences. Profile data (name, income) lives in the
//! profile store, not here.

use serde::{Deserialize, Serialize};

use super::paths::FinancePaths;
use crate::aggregator::BucketOrder;
use crate::error::FinanceError;

/// User settings for GenZ Finance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// How many entries the dashboard shows under "Recent Transactions"
    #[serde(default = "default_recent_limit")]
    pub recent_transactions_limit: usize,

    /// Order of date sections in the transaction list
    #[serde(default)]
    pub bucket_order: BucketOrder,

    /// Default log level (overridden by `RUST_LOG`)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_recent_limit() -> usize {
    3
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            recent_transactions_limit: default_recent_limit(),
            bucket_order: BucketOrder::default(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FinancePaths) -> Result<Self, FinanceError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FinanceError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FinanceError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinancePaths) -> Result<(), FinanceError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FinanceError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            FinanceError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.recent_transactions_limit, 3);
        assert_eq!(settings.bucket_order, BucketOrder::FirstSeen);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.bucket_order = BucketOrder::NewestFirst;
        settings.recent_transactions_limit = 5;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.bucket_order, BucketOrder::NewestFirst);
        assert_eq!(loaded.recent_transactions_limit, 5);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"bucket_order":"newest-first"}"#).unwrap();
        assert_eq!(settings.bucket_order, BucketOrder::NewestFirst);
        assert_eq!(settings.recent_transactions_limit, 3);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_corrupt_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, FinanceError::Config(_)));
    }
}
