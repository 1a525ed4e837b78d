//! Clipboard Strategy
//!
//! The async Clipboard API when the page may use it, otherwise a temporary
//! text input selected and copied with the legacy copy command.

use serde::Serialize;
use tracing::debug;

use crate::error::Result;

/// What the environment offers for writing to the clipboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClipboardSupport {
    /// `navigator.clipboard` exists
    pub api_available: bool,
    /// `window.isSecureContext`
    pub secure_context: bool,
}

/// How the text was (or will be) copied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyMethod {
    ClipboardApi,
    Fallback,
}

impl ClipboardSupport {
    pub fn method(&self) -> CopyMethod {
        if self.api_available && self.secure_context {
            CopyMethod::ClipboardApi
        } else {
            CopyMethod::Fallback
        }
    }
}

/// Primary clipboard access
pub trait Clipboard {
    fn support(&self) -> ClipboardSupport;

    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Manual selection-and-copy fallback
pub trait FallbackCopier {
    /// Handle to the temporary input holding the text
    type Input;

    fn insert_temp_input(&mut self, text: &str) -> Result<Self::Input>;

    /// Select the input and run the copy command
    fn exec_copy(&mut self, input: &Self::Input) -> Result<()>;

    fn remove_temp_input(&mut self, input: Self::Input);
}

/// Copy through the fallback; the temporary input is removed on every path
pub fn fallback_copy<F: FallbackCopier + ?Sized>(copier: &mut F, text: &str) -> Result<()> {
    let input = copier.insert_temp_input(text)?;
    let result = copier.exec_copy(&input);
    copier.remove_temp_input(input);
    result
}

/// Copy `text` with the best available method
///
/// A failing Clipboard API write is reported as is, without retrying
/// through the fallback.
pub fn copy_text<T: Clipboard + FallbackCopier>(target: &mut T, text: &str) -> Result<CopyMethod> {
    let method = target.support().method();
    debug!(?method, "Copying to clipboard");
    match method {
        CopyMethod::ClipboardApi => target.write_text(text)?,
        CopyMethod::Fallback => fallback_copy(target, text)?,
    }
    Ok(method)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::MemoryPage;

    #[test]
    fn test_method_requires_secure_context() {
        let insecure = ClipboardSupport {
            api_available: true,
            secure_context: false,
        };
        assert_eq!(insecure.method(), CopyMethod::Fallback);

        let missing = ClipboardSupport {
            api_available: false,
            secure_context: true,
        };
        assert_eq!(missing.method(), CopyMethod::Fallback);

        let full = ClipboardSupport {
            api_available: true,
            secure_context: true,
        };
        assert_eq!(full.method(), CopyMethod::ClipboardApi);
    }

    #[test]
    fn test_primary_path() {
        let mut page = MemoryPage::listing(&[]);
        page.clipboard.api_available = true;
        page.clipboard.secure_context = true;

        let method = copy_text(&mut page, "https://blog.example/post").expect("copy");
        assert_eq!(method, CopyMethod::ClipboardApi);
        assert_eq!(page.clipboard.contents.as_deref(), Some("https://blog.example/post"));
        assert_eq!(page.clipboard.temp_inputs_created, 0);
    }

    #[test]
    fn test_fallback_path_cleans_up() {
        let mut page = MemoryPage::listing(&[]);
        let method = copy_text(&mut page, "https://blog.example/").expect("copy");
        assert_eq!(method, CopyMethod::Fallback);
        assert_eq!(page.clipboard.contents.as_deref(), Some("https://blog.example/"));
        assert_eq!(page.clipboard.temp_inputs_created, 1);
        assert!(page.clipboard.temp_inputs.is_empty());
    }

    #[test]
    fn test_fallback_failure_still_cleans_up() {
        let mut page = MemoryPage::listing(&[]);
        page.clipboard.copy_command_fails = true;

        assert!(copy_text(&mut page, "https://blog.example/").is_err());
        assert_eq!(page.clipboard.contents, None);
        assert_eq!(page.clipboard.temp_inputs_created, 1);
        assert!(page.clipboard.temp_inputs.is_empty());
    }

    #[test]
    fn test_primary_failure_does_not_fall_back() {
        let mut page = MemoryPage::listing(&[]);
        page.clipboard.api_available = true;
        page.clipboard.secure_context = true;
        page.clipboard.write_fails = true;

        assert!(copy_text(&mut page, "https://blog.example/").is_err());
        assert_eq!(page.clipboard.temp_inputs_created, 0);
    }
}
