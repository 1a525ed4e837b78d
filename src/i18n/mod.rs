//! i18n - Internationalization Module
//!
//! The two blog languages and a HashMap-based translation table for the
//! strings the theme scripts write into the page.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Supported blog languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Portuguese (Brazil)
    #[default]
    Pt,
    /// English (US)
    En,
}

impl Language {
    /// Code stored in preferences and carried by `data-lang`
    pub fn code(&self) -> &'static str {
        match self {
            Language::Pt => "pt",
            Language::En => "en",
        }
    }

    /// Flag glyph shown by the language indicator
    pub fn flag(&self) -> &'static str {
        match self {
            Language::Pt => "🇧🇷",
            Language::En => "🇺🇸",
        }
    }

    /// Language selected by the toggle checkbox state
    pub fn from_checked(checked: bool) -> Self {
        if checked { Language::En } else { Language::Pt }
    }

    /// Checkbox state that selects this language
    pub fn is_checked(&self) -> bool {
        matches!(self, Language::En)
    }

    /// Parse a stored code, `None` for anything other than `pt` or `en`
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pt" => Some(Language::Pt),
            "en" => Some(Language::En),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s.trim()).ok_or_else(|| Error::Invalid {
            message: format!("unknown language '{s}', expected 'pt' or 'en'"),
        })
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (pt, en))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // Share button
    map.insert("share-link-copied", ("Link copiado!", "Link copied!"));
    map.insert("share-copy-failed", ("Erro ao copiar", "Copy failed"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(language: Language, key: &str) -> String {
    if let Some(&(pt, en)) = translations().get(key) {
        match language {
            Language::Pt => pt.to_string(),
            Language::En => en.to_string(),
        }
    } else {
        // Fallback: return the key itself
        key.to_string()
    }
}
