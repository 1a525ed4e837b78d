//! Language View - What the Controller Needs from the Page
//!
//! Every optional element (flag, labels) is the implementation's concern:
//! when it is absent the corresponding setter does nothing.

use crate::domain::page::{PageContext, PostItem};
use crate::i18n::Language;

/// Rendering surface driven by [`super::LanguagePreferenceController`]
pub trait LanguageView {
    /// Checked state of the toggle control, `None` when the control is missing
    fn toggle_checked(&self) -> Option<bool>;

    fn set_checked(&mut self, checked: bool);

    /// Write the flag glyph into the indicator
    fn set_flag(&mut self, glyph: &str);

    /// Mark the label of `language` active or inactive
    fn set_label_active(&mut self, language: Language, active: bool);

    /// Page root attributes
    fn page_context(&self) -> PageContext;

    /// Post-list items in document order
    fn post_items(&self) -> Vec<PostItem>;

    /// Add (`true`) or remove the hidden-state class on item `index`
    fn set_item_hidden(&mut self, index: usize, hidden: bool);

    /// Leave the page
    fn navigate(&mut self, url: &str);
}
