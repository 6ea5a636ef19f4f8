//! Profile key/value store
//!
//! A flat string-keyed map persisted as a JSON object. Only two keys are used,
//! `userName` and `monthlyIncome`, both stored as strings exactly as entered.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use serde_json::Value;
use tracing::warn;

use crate::error::FinanceError;

use super::file_io::{read_json, write_json_atomic};

pub const USER_NAME_KEY: &str = "userName";
pub const MONTHLY_INCOME_KEY: &str = "monthlyIncome";

/// Repository for the profile entries
pub struct ProfileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl ProfileStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    /// Load entries from disk; a missing file leaves the store empty
    ///
    /// Numbers and booleans are kept in their text form. Other values, or a
    /// file that is not a JSON object, are dropped with a warning so callers
    /// fall back to profile defaults.
    pub fn load(&self) -> Result<(), FinanceError> {
        let raw: BTreeMap<String, Value> = match read_json(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "unreadable profile, ignoring");
                BTreeMap::new()
            }
        };

        let file_data: BTreeMap<String, String> = raw
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::String(s) => Some((key, s)),
                Value::Number(n) => Some((key, n.to_string())),
                Value::Bool(b) => Some((key, b.to_string())),
                other => {
                    warn!(key = %key, value = %other, "unsupported profile value, ignoring");
                    None
                }
            })
            .collect();

        let mut entries = self
            .entries
            .write()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *entries = file_data;

        Ok(())
    }

    pub fn save(&self) -> Result<(), FinanceError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*entries)
    }

    pub fn get(&self, key: &str) -> Result<Option<String>, FinanceError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.get(key).cloned())
    }

    pub fn set(&self, key: &str, value: impl Into<String>) -> Result<(), FinanceError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        entries.insert(key.to_string(), value.into());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_store() -> (TempDir, ProfileStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = ProfileStore::new(temp_dir.path().join("profile.json"));
        store.load().unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_missing_file_is_empty() {
        let (_temp_dir, store) = create_store();
        assert!(store.is_empty());
        assert_eq!(store.get(USER_NAME_KEY).unwrap(), None);
    }

    #[test]
    fn test_set_save_and_reload() {
        let (temp_dir, store) = create_store();
        store.set(USER_NAME_KEY, "Alex").unwrap();
        store.set(MONTHLY_INCOME_KEY, "1300").unwrap();
        store.save().unwrap();

        let reloaded = ProfileStore::new(temp_dir.path().join("profile.json"));
        reloaded.load().unwrap();
        assert_eq!(reloaded.get(USER_NAME_KEY).unwrap().as_deref(), Some("Alex"));
        assert_eq!(reloaded.get(MONTHLY_INCOME_KEY).unwrap().as_deref(), Some("1300"));
        assert_eq!(reloaded.len(), 2);
    }

    #[test]
    fn test_file_is_flat_object() {
        let (temp_dir, store) = create_store();
        store.set(USER_NAME_KEY, "Sam").unwrap();
        store.save().unwrap();

        let raw = std::fs::read_to_string(temp_dir.path().join("profile.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["userName"], "Sam");
    }

    #[test]
    fn test_non_string_values_are_tolerated() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("profile.json");
        std::fs::write(
            &path,
            r#"{"userName":"Alex","monthlyIncome":1300,"extra":{"nested":true}}"#,
        )
        .unwrap();

        let store = ProfileStore::new(path);
        store.load().unwrap();
        assert_eq!(store.get(USER_NAME_KEY).unwrap().as_deref(), Some("Alex"));
        assert_eq!(store.get(MONTHLY_INCOME_KEY).unwrap().as_deref(), Some("1300"));
        assert_eq!(store.get("extra").unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("profile.json");
        std::fs::write(&path, "[1, 2").unwrap();

        let store = ProfileStore::new(path);
        store.load().unwrap();
        assert!(store.is_empty());
    }
}
