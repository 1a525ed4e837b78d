//! Language Preference Controller
//!
//! Single source of truth for the active language. Keeps the toggle, the
//! flag, the labels and post visibility consistent with it.

use serde::Serialize;
use tracing::{debug, info, warn};

use super::view::LanguageView;
use crate::domain::config::LanguageConfig;
use crate::i18n::Language;
use crate::states::LanguagePreference;
use crate::storage::PreferenceStorage;

/// Post visibility after a full pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Visibility {
    pub visible: usize,
    pub hidden: usize,
}

/// Result of handling one change of the toggle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ToggleOutcome {
    /// Post items were re-rendered in place
    Rendered { language: Language, visibility: Visibility },
    /// A single post conflicted with the new language; the page was left
    Navigated { language: Language, url: String },
}

impl ToggleOutcome {
    pub fn language(&self) -> Language {
        match self {
            ToggleOutcome::Rendered { language, .. } | ToggleOutcome::Navigated { language, .. } => {
                *language
            }
        }
    }

    pub fn navigated(&self) -> bool {
        matches!(self, ToggleOutcome::Navigated { .. })
    }
}

/// Language toggle controller
#[derive(Debug)]
pub struct LanguagePreferenceController<S> {
    preference: LanguagePreference<S>,
    root_url: String,
    last_outcome: Option<ToggleOutcome>,
}

impl<S: PreferenceStorage> LanguagePreferenceController<S> {
    /// Controller over an already loaded preference, without touching the page
    pub fn new(preference: LanguagePreference<S>, root_url: impl Into<String>) -> Self {
        Self {
            preference,
            root_url: root_url.into(),
            last_outcome: None,
        }
    }

    /// Load the preference from `storage` using the configured key and root URL
    pub fn with_config<V: LanguageView>(view: &mut V, storage: S, config: &LanguageConfig) -> Option<Self> {
        let preference = LanguagePreference::load_with_key(storage, config.storage_key.as_str());
        Self::init(view, preference, config.root_url.as_str())
    }

    /// Page-ready initialization
    ///
    /// Returns `None` without touching the page when the toggle control is
    /// missing; the caller then registers no change handler.
    pub fn init<V: LanguageView>(
        view: &mut V,
        preference: LanguagePreference<S>,
        root_url: impl Into<String>,
    ) -> Option<Self> {
        if view.toggle_checked().is_none() {
            debug!("Language toggle not found, skipping initialization");
            return None;
        }

        let mut controller = Self::new(preference, root_url);
        let language = controller.language();

        view.set_checked(language.is_checked());
        render_indicators(view, language);

        // Reach the same state a user change would, through the same handler
        if !view.post_items().is_empty() {
            controller.on_toggle(view, language.is_checked());
        }

        info!(language = %language, "Language toggle initialized");
        Some(controller)
    }

    /// Change handler: read the control's state and apply it
    pub fn on_change<V: LanguageView>(&mut self, view: &mut V) -> Option<ToggleOutcome> {
        let checked = view.toggle_checked()?;
        Some(self.on_toggle(view, checked))
    }

    /// Apply a new checked state of the toggle
    pub fn on_toggle<V: LanguageView>(&mut self, view: &mut V, checked: bool) -> ToggleOutcome {
        let target = Language::from_checked(checked);

        render_indicators(view, target);

        if let Err(e) = self.preference.set(target) {
            warn!(error = %e, language = %target, "Failed to persist language preference");
        }

        let page = view.page_context();
        let outcome = if page.conflicts_with(target) {
            info!(
                post_lang = page.lang.as_deref().unwrap_or_default(),
                language = %target,
                url = %self.root_url,
                "Single post does not match selected language, leaving page"
            );
            view.navigate(&self.root_url);
            ToggleOutcome::Navigated {
                language: target,
                url: self.root_url.clone(),
            }
        } else {
            let visibility = render_posts(view, target);
            debug!(
                language = %target,
                visible = visibility.visible,
                hidden = visibility.hidden,
                "Post visibility updated"
            );
            ToggleOutcome::Rendered {
                language: target,
                visibility,
            }
        };

        self.last_outcome = Some(outcome.clone());
        outcome
    }

    /// Active language
    pub fn language(&self) -> Language {
        self.preference.language()
    }

    /// Outcome of the most recent change, including the one forced by init
    pub fn last_outcome(&self) -> Option<&ToggleOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn preference(&self) -> &LanguagePreference<S> {
        &self.preference
    }

    pub fn into_preference(self) -> LanguagePreference<S> {
        self.preference
    }
}

/// Flag glyph and label states for `language`
fn render_indicators<V: LanguageView>(view: &mut V, language: Language) {
    view.set_flag(language.flag());
    view.set_label_active(Language::Pt, language == Language::Pt);
    view.set_label_active(Language::En, language == Language::En);
}

/// Full visibility pass over every post-list item
fn render_posts<V: LanguageView>(view: &mut V, language: Language) -> Visibility {
    let mut visibility = Visibility::default();
    for (index, item) in view.post_items().iter().enumerate() {
        let visible = item.is_visible_for(language);
        view.set_item_hidden(index, !visible);
        if visible {
            visibility.visible += 1;
        } else {
            visibility.hidden += 1;
        }
    }
    visibility
}
