//! MemoryPage - In-Memory Blog Page
//!
//! A page model holding exactly the elements the theme scripts touch. It
//! implements every view trait, so controllers run against it in tests and
//! in the `theme-preview` CLI. Page fixtures are TOML files deserialized
//! straight into this type.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::CLASS_MASK_HIDDEN;
use crate::domain::config::ThemeConfig;
use crate::domain::page::{PageContext, PostItem};
use crate::error::{Error, Result};
use crate::features::lang_toggle::LanguageView;
use crate::features::share::{Clipboard, ClipboardSupport, FallbackCopier, TooltipView};
use crate::features::sidebar::SidebarView;
use crate::i18n::Language;

/// `<body>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryBody {
    /// `data-layout`
    pub layout: Option<String>,
    /// `data-lang`
    pub lang: Option<String>,
    /// Boolean attributes
    pub attributes: BTreeSet<String>,
}

/// Any element the scripts only write text or classes into
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryElement {
    pub text: String,
    pub classes: BTreeSet<String>,
}

impl MemoryElement {
    pub fn with_class(class: &str) -> Self {
        Self {
            classes: BTreeSet::from([class.to_string()]),
            ..Self::default()
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    fn toggle_class(&mut self, class: &str, present: bool) {
        if present {
            self.classes.insert(class.to_string());
        } else {
            self.classes.remove(class);
        }
    }
}

/// `<input type="checkbox" id="lang-checkbox">`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryToggle {
    pub checked: bool,
}

/// One `.post-item`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryPost {
    pub title: String,
    /// `data-lang`
    pub lang: Option<String>,
    pub classes: BTreeSet<String>,
}

/// `#copy-link` and its tooltip
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryShareButton {
    /// `data-bs-original-title`
    pub title: Option<String>,
    /// `data-title-succeed`
    pub succeed_title: Option<String>,
    /// Class of the inner `<i>` icon, `None` without an icon
    pub icon_class: Option<String>,
    pub tooltip_visible: bool,
}

/// Clipboard capabilities and contents of the simulated browser
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryClipboard {
    pub api_available: bool,
    pub secure_context: bool,
    /// Clipboard API write rejects
    pub write_fails: bool,
    /// Legacy copy command raises
    pub copy_command_fails: bool,
    pub contents: Option<String>,
    /// Temporary inputs currently attached to the body
    pub temp_inputs: Vec<String>,
    pub temp_inputs_created: usize,
}

/// In-memory page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryPage {
    pub body: MemoryBody,
    pub toggle: Option<MemoryToggle>,
    pub flag: Option<MemoryElement>,
    pub pt_label: Option<MemoryElement>,
    pub en_label: Option<MemoryElement>,
    pub posts: Vec<MemoryPost>,
    pub sidebar: Option<MemoryElement>,
    pub trigger: Option<MemoryElement>,
    pub mask: Option<MemoryElement>,
    pub share_button: Option<MemoryShareButton>,
    pub clipboard: MemoryClipboard,
    /// Set once the page navigated away
    pub location: Option<String>,
    #[serde(skip)]
    config: ThemeConfig,
}

impl MemoryPage {
    /// A listing page with every theme element and one post per language code
    pub fn listing(langs: &[&str]) -> Self {
        Self {
            toggle: Some(MemoryToggle::default()),
            flag: Some(MemoryElement::default()),
            pt_label: Some(MemoryElement::default()),
            en_label: Some(MemoryElement::default()),
            posts: langs
                .iter()
                .enumerate()
                .map(|(i, lang)| MemoryPost {
                    title: format!("Post {}", i + 1),
                    lang: Some(lang.to_string()),
                    classes: BTreeSet::new(),
                })
                .collect(),
            sidebar: Some(MemoryElement::default()),
            trigger: Some(MemoryElement::default()),
            mask: Some(MemoryElement::with_class(CLASS_MASK_HIDDEN)),
            share_button: Some(MemoryShareButton::default()),
            ..Self::default()
        }
    }

    /// A single-post page fixed to `lang`
    pub fn single_post(lang: &str) -> Self {
        let mut page = Self::listing(&[]);
        page.body.layout = Some("post".to_string());
        page.body.lang = Some(lang.to_string());
        page
    }

    /// Parse a TOML page fixture
    pub fn from_toml(value: &str) -> Result<Self> {
        Ok(toml::from_str(value)?)
    }

    /// Load a TOML page fixture from disk
    pub fn load(path: &Path) -> Result<Self> {
        let value = fs::read_to_string(path)?;
        Self::from_toml(&value)
    }

    /// Use class names from `config` instead of the defaults
    pub fn with_config(mut self, config: ThemeConfig) -> Self {
        self.config = config;
        self
    }

    /// Indices of posts without the hidden-state class
    pub fn visible_posts(&self) -> Vec<usize> {
        let hidden = &self.config.language.hidden_class;
        self.posts
            .iter()
            .enumerate()
            .filter(|(_, post)| !post.classes.contains(hidden))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn flag_text(&self) -> Option<&str> {
        self.flag.as_ref().map(|flag| flag.text.as_str())
    }

    /// Whether the label of `language` carries the active class
    pub fn label_active(&self, language: Language) -> Option<bool> {
        let active = &self.config.language.active_class;
        self.label(language).map(|label| label.has_class(active))
    }

    pub fn sidebar_has_class(&self, class: &str) -> bool {
        self.sidebar.as_ref().is_some_and(|el| el.has_class(class))
    }

    pub fn mask_has_class(&self, class: &str) -> bool {
        self.mask.as_ref().is_some_and(|el| el.has_class(class))
    }

    fn label(&self, language: Language) -> Option<&MemoryElement> {
        match language {
            Language::Pt => self.pt_label.as_ref(),
            Language::En => self.en_label.as_ref(),
        }
    }

    fn label_mut(&mut self, language: Language) -> Option<&mut MemoryElement> {
        match language {
            Language::Pt => self.pt_label.as_mut(),
            Language::En => self.en_label.as_mut(),
        }
    }
}

impl LanguageView for MemoryPage {
    fn toggle_checked(&self) -> Option<bool> {
        self.toggle.map(|toggle| toggle.checked)
    }

    fn set_checked(&mut self, checked: bool) {
        if let Some(toggle) = self.toggle.as_mut() {
            toggle.checked = checked;
        }
    }

    fn set_flag(&mut self, glyph: &str) {
        if let Some(flag) = self.flag.as_mut() {
            flag.text = glyph.to_string();
        }
    }

    fn set_label_active(&mut self, language: Language, active: bool) {
        let class = self.config.language.active_class.clone();
        if let Some(label) = self.label_mut(language) {
            label.toggle_class(&class, active);
        }
    }

    fn page_context(&self) -> PageContext {
        PageContext {
            layout: self.body.layout.clone(),
            lang: self.body.lang.clone(),
        }
    }

    fn post_items(&self) -> Vec<PostItem> {
        self.posts
            .iter()
            .map(|post| PostItem {
                lang: post.lang.clone(),
            })
            .collect()
    }

    fn set_item_hidden(&mut self, index: usize, hidden: bool) {
        let class = &self.config.language.hidden_class;
        if let Some(post) = self.posts.get_mut(index) {
            if hidden {
                post.classes.insert(class.clone());
            } else {
                post.classes.remove(class);
            }
        }
    }

    fn navigate(&mut self, url: &str) {
        self.location = Some(url.to_string());
    }
}

impl SidebarView for MemoryPage {
    fn has_sidebar_elements(&self) -> bool {
        self.sidebar.is_some() && self.trigger.is_some() && self.mask.is_some()
    }

    fn set_body_attribute(&mut self, name: &str, present: bool) {
        if present {
            self.body.attributes.insert(name.to_string());
        } else {
            self.body.attributes.remove(name);
        }
    }

    fn set_sidebar_class(&mut self, class: &str, present: bool) {
        if let Some(sidebar) = self.sidebar.as_mut() {
            sidebar.toggle_class(class, present);
        }
    }

    fn set_mask_class(&mut self, class: &str, present: bool) {
        if let Some(mask) = self.mask.as_mut() {
            mask.toggle_class(class, present);
        }
    }
}

impl TooltipView for MemoryPage {
    fn has_share_button(&self) -> bool {
        self.share_button.is_some()
    }

    fn tooltip_title(&self) -> Option<String> {
        self.share_button.as_ref().and_then(|b| b.title.clone())
    }

    fn succeed_title(&self) -> Option<String> {
        self.share_button.as_ref().and_then(|b| b.succeed_title.clone())
    }

    fn set_tooltip_title(&mut self, title: &str) {
        if let Some(button) = self.share_button.as_mut() {
            button.title = Some(title.to_string());
        }
    }

    fn icon_class(&self) -> Option<String> {
        self.share_button.as_ref().and_then(|b| b.icon_class.clone())
    }

    fn set_icon_class(&mut self, class: &str) {
        if let Some(button) = self.share_button.as_mut() {
            button.icon_class = Some(class.to_string());
        }
    }

    fn show_tooltip(&mut self) {
        if let Some(button) = self.share_button.as_mut() {
            button.tooltip_visible = true;
        }
    }

    fn hide_tooltip(&mut self) {
        if let Some(button) = self.share_button.as_mut() {
            button.tooltip_visible = false;
        }
    }
}

impl Clipboard for MemoryPage {
    fn support(&self) -> ClipboardSupport {
        ClipboardSupport {
            api_available: self.clipboard.api_available,
            secure_context: self.clipboard.secure_context,
        }
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        if self.clipboard.write_fails {
            return Err(Error::Clipboard {
                message: "Clipboard write rejected".to_string(),
            });
        }
        self.clipboard.contents = Some(text.to_string());
        Ok(())
    }
}

impl FallbackCopier for MemoryPage {
    /// Index into `clipboard.temp_inputs`
    type Input = usize;

    fn insert_temp_input(&mut self, text: &str) -> Result<usize> {
        self.clipboard.temp_inputs.push(text.to_string());
        self.clipboard.temp_inputs_created += 1;
        Ok(self.clipboard.temp_inputs.len() - 1)
    }

    fn exec_copy(&mut self, input: &usize) -> Result<()> {
        if self.clipboard.copy_command_fails {
            return Err(Error::Clipboard {
                message: "Copy command failed".to_string(),
            });
        }
        let text = self.clipboard.temp_inputs.get(*input).cloned().ok_or_else(|| Error::Clipboard {
            message: "Temporary input detached".to_string(),
        })?;
        self.clipboard.contents = Some(text);
        Ok(())
    }

    fn remove_temp_input(&mut self, input: usize) {
        if input < self.clipboard.temp_inputs.len() {
            self.clipboard.temp_inputs.remove(input);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_parsing() {
        let page = MemoryPage::from_toml(
            r#"
            toggle = { checked = true }
            flag = {}
            pt_label = {}

            [body]
            layout = "post"
            lang = "en"

            [[posts]]
            title = "Olá"
            lang = "pt"

            [[posts]]
            title = "Hello"
            lang = "en"
            "#,
        )
        .expect("parse");

        assert_eq!(page.toggle_checked(), Some(true));
        assert!(page.flag.is_some());
        assert!(page.en_label.is_none());
        assert_eq!(page.posts.len(), 2);
        assert_eq!(page.page_context(), PageContext::new(Some("post"), Some("en")));
        assert!(!page.has_sidebar_elements());
    }

    #[test]
    fn test_demo_fixtures_parse() {
        let listing = MemoryPage::from_toml(include_str!("../../demos/listing.toml")).expect("listing");
        assert_eq!(listing.posts.len(), 3);
        assert!(listing.has_sidebar_elements());
        assert!(listing.mask_has_class("d-none"));
        assert_eq!(listing.visible_posts().len(), 3);

        let post = MemoryPage::from_toml(include_str!("../../demos/post.toml")).expect("post");
        assert!(post.page_context().is_single_post());
        assert_eq!(post.succeed_title().as_deref(), Some("Link copied!"));
        assert!(post.support().api_available);
    }

    #[test]
    fn test_custom_hidden_class() {
        let mut config = ThemeConfig::default();
        config.language.hidden_class = "is-hidden".to_string();
        let mut page = MemoryPage::listing(&["pt", "en"]).with_config(config);

        page.set_item_hidden(1, true);
        assert!(page.posts[1].classes.contains("is-hidden"));
        assert_eq!(page.visible_posts(), vec![0]);
    }

    #[test]
    fn test_missing_elements_are_ignored() {
        let mut page = MemoryPage::default();
        page.set_checked(true);
        page.set_flag("🇺🇸");
        page.set_label_active(Language::En, true);
        page.set_item_hidden(3, true);
        assert_eq!(page, MemoryPage::default());
    }
}
