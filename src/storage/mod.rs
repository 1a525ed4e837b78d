//! Storage - Preference Persistence Boundary
//!
//! A string key/value store with the semantics of the browser's
//! `localStorage`: reads of an absent key yield `None`, writes overwrite.

mod file;

pub use file::FileStorage;

use std::collections::HashMap;

use crate::error::Result;

/// Key/value persistence used by [`crate::states::LanguagePreference`]
pub trait PreferenceStorage {
    /// Read a value, `Ok(None)` when the key was never written
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: PreferenceStorage + ?Sized> PreferenceStorage for &mut S {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }
}

/// In-process storage, the stand-in for `localStorage` in tests and previews
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
    /// Number of successful writes
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one entry
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.items.insert(key.to_string(), value.to_string());
        storage
    }

    /// Number of writes performed since creation
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_absent_key() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("blog-language").expect("read"), None);
    }

    #[test]
    fn test_memory_storage_overwrite() {
        let mut storage = MemoryStorage::with_item("blog-language", "pt");
        storage.set_item("blog-language", "en").expect("write");
        assert_eq!(
            storage.get_item("blog-language").expect("read").as_deref(),
            Some("en")
        );
        assert_eq!(storage.writes(), 1);
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn write_through<S: PreferenceStorage>(mut storage: S) {
            storage.set_item("k", "v").expect("write");
        }

        let mut storage = MemoryStorage::new();
        write_through(&mut storage);
        assert_eq!(storage.get_item("k").expect("read").as_deref(), Some("v"));
    }
}
