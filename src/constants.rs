//! Theme Constants
//!
//! DOM names, storage keys and timings shared by the controllers.
//! `ThemeConfig` uses these as its defaults.

/// localStorage key holding the language preference
pub const LANGUAGE_STORAGE_KEY: &str = "blog-language";

/// Where a single-post page sends the reader when the language no longer matches
pub const SITE_ROOT_URL: &str = "/";

/// Page root attribute naming the layout, and the value marking a single post
pub const ATTR_LAYOUT: &str = "data-layout";
pub const LAYOUT_POST: &str = "post";

/// Language attribute on the page root and on each post-list item
pub const ATTR_LANG: &str = "data-lang";

/// Language toggle elements
pub const LANG_CHECKBOX_ID: &str = "lang-checkbox";
pub const FLAG_INDICATOR_ID: &str = "flag-indicator";
pub const LANG_PT_LABEL_SELECTOR: &str = ".lang-pt";
pub const LANG_EN_LABEL_SELECTOR: &str = ".lang-en";
pub const POST_ITEM_SELECTOR: &str = ".post-item";

/// Classes written by the language controller
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_POST_HIDDEN: &str = "post-hidden";

/// Sidebar elements and state markers
pub const SIDEBAR_ID: &str = "sidebar";
pub const SIDEBAR_TRIGGER_ID: &str = "sidebar-trigger";
pub const MASK_ID: &str = "mask";
pub const ATTR_SIDEBAR_DISPLAY: &str = "sidebar-display";
pub const CLASS_SIDEBAR_RAISED: &str = "z-2";
pub const CLASS_MASK_HIDDEN: &str = "d-none";

/// Share button
pub const COPY_LINK_ID: &str = "copy-link";
pub const ATTR_TOOLTIP_TITLE: &str = "data-bs-original-title";
pub const ATTR_TITLE_SUCCEED: &str = "data-title-succeed";
pub const ICON_COPY_SUCCESS: &str = "fa-fw fas fa-check text-success";

/// Tooltip feedback timings
pub const TOOLTIP_HIDE_MS: u64 = 1500;
pub const TOOLTIP_RESTORE_MS: u64 = 2000;

/// Preference file used by the desktop store
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Optional theme configuration file in the config directory
pub const THEME_CONFIG_FILE: &str = "theme.toml";
