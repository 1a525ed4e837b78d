//! Config - Theme Configuration
//!
//! Element names, storage key and timings the controllers use. Every field
//! has a default, so an empty `theme.toml` is a valid configuration.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::constants::*;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;

/// Main theme configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ThemeConfig {
    /// Language toggle configuration
    pub language: LanguageConfig,
    /// Sidebar configuration
    pub sidebar: SidebarConfig,
    /// Share button configuration
    pub share: ShareConfig,
}

/// Language toggle configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    /// localStorage key
    pub storage_key: String,
    /// Redirect target when a single post conflicts with the preference
    pub root_url: String,
    /// Toggle checkbox id
    pub checkbox_id: String,
    /// Flag indicator id
    pub flag_id: String,
    /// "pt" label selector
    pub pt_label_selector: String,
    /// "en" label selector
    pub en_label_selector: String,
    /// Post-list item selector
    pub post_item_selector: String,
    /// Class marking the active label
    pub active_class: String,
    /// Class hiding a post-list item
    pub hidden_class: String,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            storage_key: LANGUAGE_STORAGE_KEY.to_string(),
            root_url: SITE_ROOT_URL.to_string(),
            checkbox_id: LANG_CHECKBOX_ID.to_string(),
            flag_id: FLAG_INDICATOR_ID.to_string(),
            pt_label_selector: LANG_PT_LABEL_SELECTOR.to_string(),
            en_label_selector: LANG_EN_LABEL_SELECTOR.to_string(),
            post_item_selector: POST_ITEM_SELECTOR.to_string(),
            active_class: CLASS_ACTIVE.to_string(),
            hidden_class: CLASS_POST_HIDDEN.to_string(),
        }
    }
}

/// Sidebar configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    pub sidebar_id: String,
    pub trigger_id: String,
    pub mask_id: String,
    /// Body attribute present while the sidebar is expanded
    pub display_attribute: String,
    /// Sidebar class present while expanded
    pub raised_class: String,
    /// Mask class present while collapsed
    pub mask_hidden_class: String,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            sidebar_id: SIDEBAR_ID.to_string(),
            trigger_id: SIDEBAR_TRIGGER_ID.to_string(),
            mask_id: MASK_ID.to_string(),
            display_attribute: ATTR_SIDEBAR_DISPLAY.to_string(),
            raised_class: CLASS_SIDEBAR_RAISED.to_string(),
            mask_hidden_class: CLASS_MASK_HIDDEN.to_string(),
        }
    }
}

/// Share button configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    pub button_id: String,
    /// Icon class shown after a successful copy
    pub success_icon: String,
    /// Delay before hiding the success tooltip
    pub tooltip_hide_ms: u64,
    /// Delay before restoring the original title and icon
    pub tooltip_restore_ms: u64,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            button_id: COPY_LINK_ID.to_string(),
            success_icon: ICON_COPY_SUCCESS.to_string(),
            tooltip_hide_ms: TOOLTIP_HIDE_MS,
            tooltip_restore_ms: TOOLTIP_RESTORE_MS,
        }
    }
}

impl ShareConfig {
    pub fn hide_after(&self) -> Duration {
        Duration::from_millis(self.tooltip_hide_ms)
    }

    pub fn restore_after(&self) -> Duration {
        Duration::from_millis(self.tooltip_restore_ms)
    }
}

impl ThemeConfig {
    /// Parse from TOML text
    pub fn from_toml(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(value)?)
    }

    /// Load from an explicit path
    pub fn load(path: &Path) -> Result<Self> {
        info!(path = ?path, "Loading theme config");
        let value = fs::read_to_string(path)?;
        Self::from_toml(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse theme config");
            e
        })
    }

    /// Load `theme.toml` from the config directory, defaults when it does not exist
    pub fn load_default() -> Result<Self> {
        let path = get_or_create_config_dir()?.join(THEME_CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Serialize to TOML text
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ThemeConfig::from_toml("").expect("parse");
        assert_eq!(config, ThemeConfig::default());
        assert_eq!(config.language.storage_key, "blog-language");
        assert_eq!(config.language.hidden_class, "post-hidden");
        assert_eq!(config.share.tooltip_restore_ms, 2000);
    }

    #[test]
    fn test_partial_override() {
        let config = ThemeConfig::from_toml(
            r#"
            [language]
            root_url = "/blog/"

            [share]
            tooltip_hide_ms = 1000
            "#,
        )
        .expect("parse");
        assert_eq!(config.language.root_url, "/blog/");
        assert_eq!(config.language.checkbox_id, "lang-checkbox");
        assert_eq!(config.share.hide_after(), Duration::from_millis(1000));
        assert_eq!(config.share.restore_after(), Duration::from_millis(2000));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ThemeConfig::default();
        let text = config.to_toml().expect("serialize");
        assert_eq!(ThemeConfig::from_toml(&text).expect("parse"), config);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("theme.toml");
        fs::write(&path, "[sidebar]\nmask_id = \"overlay\"\n").expect("seed");
        let config = ThemeConfig::load(&path).expect("load");
        assert_eq!(config.sidebar.mask_id, "overlay");
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(ThemeConfig::from_toml("[language\n").is_err());
    }
}
