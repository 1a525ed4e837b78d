//! Sidebar Toggle
//!
//! Collapsible sidebar for narrow screens. The trigger and the mask both
//! toggle a single `expanded` flag that three elements mirror in lockstep.

use tracing::{debug, warn};

use crate::domain::config::SidebarConfig;

/// Rendering surface for the sidebar
pub trait SidebarView {
    /// Sidebar, trigger and mask are all present
    fn has_sidebar_elements(&self) -> bool;

    /// Add or remove a boolean attribute on the body
    fn set_body_attribute(&mut self, name: &str, present: bool);

    fn set_sidebar_class(&mut self, class: &str, present: bool);

    fn set_mask_class(&mut self, class: &str, present: bool);
}

/// Sidebar controller
#[derive(Debug, Clone)]
pub struct SidebarController {
    config: SidebarConfig,
    expanded: bool,
}

impl SidebarController {
    /// Returns `None` when any of the three elements is missing
    pub fn attach<V: SidebarView>(view: &V, config: SidebarConfig) -> Option<Self> {
        if !view.has_sidebar_elements() {
            warn!("Sidebar elements not found, skipping initialization");
            return None;
        }

        Some(Self {
            config,
            expanded: false,
        })
    }

    /// Trigger or mask clicked
    pub fn toggle<V: SidebarView>(&mut self, view: &mut V) -> bool {
        self.expanded = !self.expanded;
        view.set_body_attribute(&self.config.display_attribute, self.expanded);
        view.set_sidebar_class(&self.config.raised_class, self.expanded);
        view.set_mask_class(&self.config.mask_hidden_class, !self.expanded);
        debug!(expanded = self.expanded, "Sidebar toggled");
        self.expanded
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }
}
