//! Page - Read-only Facts Supplied by the Page Template

use serde::{Deserialize, Serialize};

use crate::constants::LAYOUT_POST;
use crate::i18n::Language;

/// Page root attributes (`<body data-layout=... data-lang=...>`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageContext {
    /// Layout name, `post` for a single-post page
    pub layout: Option<String>,
    /// Fixed language of a single post
    pub lang: Option<String>,
}

impl PageContext {
    pub fn new(layout: Option<&str>, lang: Option<&str>) -> Self {
        Self {
            layout: layout.map(str::to_string),
            lang: lang.map(str::to_string),
        }
    }

    /// Whether this page renders exactly one post
    pub fn is_single_post(&self) -> bool {
        self.layout.as_deref() == Some(LAYOUT_POST)
    }

    /// A single post whose fixed language differs from `target`
    ///
    /// Such a page cannot be relabeled in place. A post without a language
    /// never conflicts.
    pub fn conflicts_with(&self, target: Language) -> bool {
        self.is_single_post()
            && self
                .lang
                .as_deref()
                .is_some_and(|lang| !lang.is_empty() && lang != target.code())
    }
}

/// One post-list item as seen by the language controller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostItem {
    /// Raw `data-lang` value
    pub lang: Option<String>,
}

impl PostItem {
    pub fn new(lang: Option<&str>) -> Self {
        Self {
            lang: lang.map(str::to_string),
        }
    }

    /// Visible exactly when tagged with the active language
    pub fn is_visible_for(&self, active: Language) -> bool {
        self.lang.as_deref() == Some(active.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_post_conflict() {
        let page = PageContext::new(Some("post"), Some("en"));
        assert!(page.conflicts_with(Language::Pt));
        assert!(!page.conflicts_with(Language::En));
    }

    #[test]
    fn test_listing_page_never_conflicts() {
        let page = PageContext::new(Some("home"), Some("en"));
        assert!(!page.conflicts_with(Language::Pt));
        assert!(!PageContext::default().conflicts_with(Language::En));
    }

    #[test]
    fn test_post_without_language_never_conflicts() {
        assert!(!PageContext::new(Some("post"), None).conflicts_with(Language::En));
        assert!(!PageContext::new(Some("post"), Some("")).conflicts_with(Language::En));
    }

    #[test]
    fn test_untagged_item_is_hidden() {
        assert!(!PostItem::new(None).is_visible_for(Language::Pt));
        assert!(!PostItem::new(Some("es")).is_visible_for(Language::Pt));
        assert!(PostItem::new(Some("pt")).is_visible_for(Language::Pt));
    }
}
