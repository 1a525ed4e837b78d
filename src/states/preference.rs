//! LanguagePreference - Active Language State
//!
//! Owns the active language and reads/writes it through a
//! [`PreferenceStorage`]. Storage problems never escape as failures of the
//! page: reads fall back to the default language and writes keep the new
//! in-memory value.

use tracing::{debug, warn};

use crate::constants::LANGUAGE_STORAGE_KEY;
use crate::error::Result;
use crate::i18n::Language;
use crate::storage::PreferenceStorage;

/// State holder for the reader's language choice
#[derive(Debug)]
pub struct LanguagePreference<S> {
    storage: S,
    key: String,
    language: Language,
}

impl<S: PreferenceStorage> LanguagePreference<S> {
    /// Load under the default `blog-language` key
    pub fn load(storage: S) -> Self {
        Self::load_with_key(storage, LANGUAGE_STORAGE_KEY)
    }

    /// Load the stored preference, defaulting when absent, unknown or unreadable
    pub fn load_with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let language = match storage.get_item(&key) {
            Ok(Some(code)) => Language::from_code(&code).unwrap_or_else(|| {
                debug!(key = %key, value = %code, "Unknown stored language, using default");
                Language::default()
            }),
            Ok(None) => Language::default(),
            Err(e) => {
                warn!(error = %e, key = %key, "Failed to read language preference");
                Language::default()
            }
        };

        Self {
            storage,
            key,
            language,
        }
    }

    /// Current language
    pub fn language(&self) -> Language {
        self.language
    }

    /// Storage key in use
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Set and persist the language
    ///
    /// The in-memory value changes even when the write fails.
    pub fn set(&mut self, language: Language) -> Result<()> {
        self.language = language;
        self.storage.set_item(&self.key, language.code())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give the storage back, e.g. to simulate a reload
    pub fn into_storage(self) -> S {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::storage::MemoryStorage;

    struct BrokenStorage;

    impl PreferenceStorage for BrokenStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>> {
            Err(Error::Storage {
                message: "storage disabled".to_string(),
            })
        }

        fn set_item(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Storage {
                message: "quota exceeded".to_string(),
            })
        }
    }

    #[test]
    fn test_absent_key_defaults_to_portuguese() {
        let preference = LanguagePreference::load(MemoryStorage::new());
        assert_eq!(preference.language(), Language::Pt);
    }

    #[test]
    fn test_corrupted_value_treated_as_absent() {
        let storage = MemoryStorage::with_item(LANGUAGE_STORAGE_KEY, "klingon");
        let preference = LanguagePreference::load(storage);
        assert_eq!(preference.language(), Language::Pt);
    }

    #[test]
    fn test_round_trip_survives_reload() {
        for language in [Language::En, Language::Pt] {
            let mut preference = LanguagePreference::load(MemoryStorage::new());
            preference.set(language).expect("write");

            let reloaded = LanguagePreference::load(preference.into_storage());
            assert_eq!(reloaded.language(), language);
        }
    }

    #[test]
    fn test_read_failure_falls_back() {
        let preference = LanguagePreference::load(BrokenStorage);
        assert_eq!(preference.language(), Language::Pt);
    }

    #[test]
    fn test_write_failure_keeps_new_value() {
        let mut preference = LanguagePreference::load(BrokenStorage);
        assert!(preference.set(Language::En).is_err());
        assert_eq!(preference.language(), Language::En);
    }

    #[test]
    fn test_custom_key() {
        let storage = MemoryStorage::with_item("lang", "en");
        let preference = LanguagePreference::load_with_key(storage, "lang");
        assert_eq!(preference.key(), "lang");
        assert_eq!(preference.language(), Language::En);
    }
}
