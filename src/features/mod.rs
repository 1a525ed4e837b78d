//! Features - Vertical Feature Slices
//!
//! Each feature contains its controller and the view trait it renders through.

pub mod lang_toggle;
pub mod share;
pub mod sidebar;
