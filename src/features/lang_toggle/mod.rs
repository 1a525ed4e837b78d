//! Language Toggle
//!
//! The pt/en switch that filters the post list and keeps the flag and
//! labels in sync with the stored preference.

pub mod controller;
pub mod view;

pub use controller::{LanguagePreferenceController, ToggleOutcome, Visibility};
pub use view::LanguageView;
