//! Share Controller
//!
//! Copies the page URL and gives transient tooltip feedback. The feedback
//! is undone by [`ShareController::restore`] once the restore delay has
//! passed; the caller owns the timers.

use std::time::Duration;

use serde::Serialize;
use tracing::{info, warn};

use super::clipboard::{Clipboard, CopyMethod, FallbackCopier, copy_text};
use crate::domain::config::ShareConfig;
use crate::error::Result;
use crate::i18n::{Language, t};

/// Rendering surface for the share button and its tooltip
pub trait TooltipView {
    fn has_share_button(&self) -> bool;

    /// Current tooltip title (`data-bs-original-title`)
    fn tooltip_title(&self) -> Option<String>;

    /// Theme-provided success text (`data-title-succeed`)
    fn succeed_title(&self) -> Option<String>;

    fn set_tooltip_title(&mut self, title: &str);

    fn icon_class(&self) -> Option<String>;

    fn set_icon_class(&mut self, class: &str);

    fn show_tooltip(&mut self);

    fn hide_tooltip(&mut self);
}

/// Feedback currently on screen and how to undo it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingFeedback {
    pub succeeded: bool,
    /// Title shown while the feedback lasts
    pub title: String,
    original_title: Option<String>,
    original_icon: Option<String>,
    /// Hide the tooltip early (success only)
    pub hide_after: Option<Duration>,
    /// Restore title/icon (and hide, on error)
    pub restore_after: Duration,
}

/// Share button controller
#[derive(Debug, Clone)]
pub struct ShareController {
    config: ShareConfig,
    language: Language,
}

impl ShareController {
    pub fn new(config: ShareConfig, language: Language) -> Self {
        Self { config, language }
    }

    /// Returns `None` when the page has no share button
    pub fn attach<V: TooltipView>(view: &V, config: ShareConfig, language: Language) -> Option<Self> {
        if !view.has_share_button() {
            return None;
        }
        Some(Self::new(config, language))
    }

    /// Click handler for environments with a synchronous clipboard
    pub fn copy_link<P>(&self, page: &mut P, url: &str) -> (Result<CopyMethod>, PendingFeedback)
    where
        P: Clipboard + FallbackCopier + TooltipView,
    {
        let result = copy_text(page, url);
        let pending = self.show_feedback(page, result.as_ref().map(|_| ()).map_err(|e| e.to_string()));
        (result, pending)
    }

    /// Put the success or error feedback on screen
    pub fn show_feedback<V: TooltipView>(
        &self,
        view: &mut V,
        result: std::result::Result<(), String>,
    ) -> PendingFeedback {
        let original_title = view.tooltip_title();

        match result {
            Ok(()) => {
                let title = view
                    .succeed_title()
                    .unwrap_or_else(|| t(self.language, "share-link-copied"));
                let original_icon = view.icon_class();

                view.set_tooltip_title(&title);
                if original_icon.is_some() {
                    view.set_icon_class(&self.config.success_icon);
                }
                view.show_tooltip();
                info!("Link copied");

                PendingFeedback {
                    succeeded: true,
                    title,
                    original_title,
                    original_icon,
                    hide_after: Some(self.config.hide_after()),
                    restore_after: self.config.restore_after(),
                }
            }
            Err(e) => {
                warn!(error = %e, "Could not copy to clipboard");
                let title = t(self.language, "share-copy-failed");

                view.set_tooltip_title(&title);
                view.show_tooltip();

                PendingFeedback {
                    succeeded: false,
                    title,
                    original_title,
                    original_icon: None,
                    hide_after: None,
                    restore_after: self.config.restore_after(),
                }
            }
        }
    }

    /// Early hide of a success tooltip
    pub fn hide<V: TooltipView>(&self, view: &mut V) {
        view.hide_tooltip();
    }

    /// Undo the feedback
    pub fn restore<V: TooltipView>(&self, view: &mut V, pending: PendingFeedback) {
        if let Some(title) = &pending.original_title {
            view.set_tooltip_title(title);
        }
        if let Some(icon) = &pending.original_icon {
            view.set_icon_class(icon);
        }
        if !pending.succeeded {
            view.hide_tooltip();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::MemoryPage;

    fn page_with_button() -> MemoryPage {
        let mut page = MemoryPage::listing(&[]);
        let button = page.share_button.as_mut().expect("button");
        button.title = Some("Compartilhar".to_string());
        button.icon_class = Some("fa-fw fas fa-link".to_string());
        page
    }

    #[test]
    fn test_success_feedback_and_restore() {
        let mut page = page_with_button();
        let share = ShareController::new(ShareConfig::default(), Language::Pt);

        let (result, pending) = share.copy_link(&mut page, "https://blog.example/a");
        assert!(result.is_ok());
        assert!(pending.succeeded);
        assert_eq!(pending.hide_after, Some(Duration::from_millis(1500)));
        assert_eq!(pending.restore_after, Duration::from_millis(2000));

        let button = page.share_button.as_ref().expect("button");
        assert_eq!(button.title.as_deref(), Some("Link copiado!"));
        assert_eq!(button.icon_class.as_deref(), Some("fa-fw fas fa-check text-success"));
        assert!(button.tooltip_visible);

        share.hide(&mut page);
        share.restore(&mut page, pending);
        let button = page.share_button.as_ref().expect("button");
        assert_eq!(button.title.as_deref(), Some("Compartilhar"));
        assert_eq!(button.icon_class.as_deref(), Some("fa-fw fas fa-link"));
        assert!(!button.tooltip_visible);
    }

    #[test]
    fn test_theme_success_title_wins() {
        let mut page = page_with_button();
        if let Some(button) = page.share_button.as_mut() {
            button.succeed_title = Some("Copied ✓".to_string());
        }
        let share = ShareController::new(ShareConfig::default(), Language::En);
        let (_, pending) = share.copy_link(&mut page, "https://blog.example/");
        assert_eq!(pending.title, "Copied ✓");
    }

    #[test]
    fn test_error_feedback_restores_and_hides() {
        let mut page = page_with_button();
        page.clipboard.copy_command_fails = true;
        let share = ShareController::new(ShareConfig::default(), Language::En);

        let (result, pending) = share.copy_link(&mut page, "https://blog.example/");
        assert!(result.is_err());
        assert!(!pending.succeeded);
        assert_eq!(pending.hide_after, None);
        assert!(page.clipboard.temp_inputs.is_empty());

        let button = page.share_button.as_ref().expect("button");
        assert_eq!(button.title.as_deref(), Some("Copy failed"));
        assert_eq!(button.icon_class.as_deref(), Some("fa-fw fas fa-link"));
        assert!(button.tooltip_visible);

        share.restore(&mut page, pending);
        let button = page.share_button.as_ref().expect("button");
        assert_eq!(button.title.as_deref(), Some("Compartilhar"));
        assert!(!button.tooltip_visible);
    }

    #[test]
    fn test_missing_button_is_noop() {
        let mut page = MemoryPage::listing(&[]);
        page.share_button = None;
        assert!(ShareController::attach(&page, ShareConfig::default(), Language::Pt).is_none());
    }
}
