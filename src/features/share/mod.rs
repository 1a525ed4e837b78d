//! Share Button
//!
//! "Copy link" with tooltip feedback.

pub mod clipboard;
pub mod controller;

pub use clipboard::{Clipboard, ClipboardSupport, CopyMethod, FallbackCopier, copy_text, fallback_copy};
pub use controller::{PendingFeedback, ShareController, TooltipView};
