//! FileStorage - Preferences in a Local JSON File
//!
//! Keeps every key in one JSON object so the desktop side mirrors what the
//! browser keeps in `localStorage`.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use tracing::{debug, error};

use super::PreferenceStorage;
use crate::constants::PREFERENCES_FILE;
use crate::error::Result;
use crate::helpers::{get_or_create_data_dir, write_atomic};

/// JSON file backed preference storage
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage at an explicit file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at `preferences.json` in the platform data directory
    pub fn in_data_dir() -> Result<Self> {
        Ok(Self::new(get_or_create_data_dir()?.join(PREFERENCES_FILE)))
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        let items = serde_json::from_str(&content).map_err(|e| {
            error!(error = %e, path = ?self.path, "Failed to parse preferences file");
            e
        })?;
        Ok(items)
    }
}

impl PreferenceStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        // A corrupted file is replaced rather than blocking the write
        let mut items = self.load().unwrap_or_default();
        items.insert(key.to_string(), value.to_string());
        let content = serde_json::to_string_pretty(&items)?;
        write_atomic(&self.path, &content)?;
        debug!(path = ?self.path, key, value, "Preference saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::new(dir.path().join("preferences.json"));
        assert_eq!(storage.get_item("blog-language").expect("read"), None);
    }

    #[test]
    fn test_round_trip_through_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("preferences.json");

        let mut storage = FileStorage::new(&path);
        storage.set_item("blog-language", "en").expect("write");
        storage.set_item("other", "x").expect("write");

        let reopened = FileStorage::new(&path);
        assert_eq!(
            reopened.get_item("blog-language").expect("read").as_deref(),
            Some("en")
        );
        assert_eq!(reopened.get_item("other").expect("read").as_deref(), Some("x"));
    }

    #[test]
    fn test_corrupted_file_errors_on_read_and_is_replaced_on_write() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("preferences.json");
        fs::write(&path, "not json").expect("seed");

        let mut storage = FileStorage::new(&path);
        assert!(storage.get_item("blog-language").is_err());

        storage.set_item("blog-language", "pt").expect("write");
        assert_eq!(
            storage.get_item("blog-language").expect("read").as_deref(),
            Some("pt")
        );
    }
}
