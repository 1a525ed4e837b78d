//! File System Utilities
//!
//! Configuration and data directory management for the desktop side
//! (the `theme-preview` CLI and the file-backed preference store).

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("io.github", "blog-theme", "theme-scripts").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

/// Get or create the configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/theme-scripts/` or `$XDG_CONFIG_HOME/theme-scripts/`
/// - **macOS**: `~/Library/Application Support/io.github.blog-theme.theme-scripts/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\blog-theme\theme-scripts\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.config_dir())
}

/// Get or create the data directory holding persisted preferences
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/theme-scripts/`
/// - **macOS**: `~/Library/Application Support/io.github.blog-theme.theme-scripts/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\blog-theme\theme-scripts\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.data_dir())
}

/// Write a file by writing a sibling temp file and renaming it over the target
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
