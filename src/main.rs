//! Theme Preview - Main Entry Point
//!
//! Runs the theme scripts against a TOML page fixture and prints the page
//! state they leave behind.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use theme_scripts::domain::config::ThemeConfig;
use theme_scripts::features::lang_toggle::{LanguagePreferenceController, ToggleOutcome};
use theme_scripts::features::share::{CopyMethod, PendingFeedback, ShareController};
use theme_scripts::features::sidebar::SidebarController;
use theme_scripts::i18n::Language;
use theme_scripts::page::MemoryPage;
use theme_scripts::states::LanguagePreference;
use theme_scripts::storage::FileStorage;

#[derive(Parser)]
#[command(name = "theme-preview", version, about = "Preview the blog theme scripts on a page fixture")]
struct Cli {
    /// Theme config file (defaults to theme.toml in the config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Preference file (defaults to preferences.json in the data directory)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load a page, initialize the scripts and print the result as JSON
    Render {
        /// TOML page fixture
        page: PathBuf,

        /// Simulate the reader switching the toggle to this language
        #[arg(long)]
        select: Option<Language>,

        /// Simulate a click on the sidebar trigger
        #[arg(long)]
        toggle_sidebar: bool,

        /// Simulate a click on the share button for this URL
        #[arg(long)]
        share: Option<String>,
    },
    /// Print the stored language
    Get,
    /// Store a language
    Set { language: Language },
}

#[derive(Serialize)]
struct ShareReport {
    method: Option<CopyMethod>,
    error: Option<String>,
    feedback: PendingFeedback,
}

#[derive(Serialize)]
struct RenderReport {
    /// `None` when the page has no language toggle
    language: Option<Language>,
    outcome: Option<ToggleOutcome>,
    sidebar_expanded: Option<bool>,
    share: Option<ShareReport>,
    page: MemoryPage,
}

fn open_store(path: Option<PathBuf>) -> Result<FileStorage> {
    match path {
        Some(path) => Ok(FileStorage::new(path)),
        None => FileStorage::in_data_dir().context("Failed to locate the preference file"),
    }
}

fn load_config(path: Option<PathBuf>) -> Result<ThemeConfig> {
    let config = match path {
        Some(path) => ThemeConfig::load(&path),
        None => ThemeConfig::load_default(),
    };
    config.context("Failed to load theme config")
}

fn render(
    config: ThemeConfig,
    storage: FileStorage,
    page_path: PathBuf,
    select: Option<Language>,
    toggle_sidebar: bool,
    share_url: Option<String>,
) -> Result<RenderReport> {
    let mut page = MemoryPage::load(&page_path)
        .with_context(|| format!("Failed to load page fixture {}", page_path.display()))?
        .with_config(config.clone());

    let mut sidebar_expanded = None;
    if let Some(mut sidebar) = SidebarController::attach(&page, config.sidebar.clone()) {
        if toggle_sidebar {
            sidebar.toggle(&mut page);
        }
        sidebar_expanded = Some(sidebar.is_expanded());
    }

    let mut language = None;
    let mut outcome = None;
    if let Some(mut controller) = LanguagePreferenceController::with_config(&mut page, storage, &config.language) {
        if let Some(target) = select {
            controller.on_toggle(&mut page, target.is_checked());
        }
        language = Some(controller.language());
        outcome = controller.last_outcome().cloned();
    }

    let share = match (share_url, ShareController::attach(&page, config.share.clone(), language.unwrap_or_default())) {
        (Some(url), Some(share)) => {
            let (result, feedback) = share.copy_link(&mut page, &url);
            Some(ShareReport {
                method: result.as_ref().ok().copied(),
                error: result.err().map(|e| e.to_string()),
                feedback,
            })
        }
        _ => None,
    };

    Ok(RenderReport {
        language,
        outcome,
        sidebar_expanded,
        share,
        page,
    })
}

fn main() -> Result<()> {
    // Initialize tracing for logging; stdout carries the JSON output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config)?;
    let storage = open_store(cli.store)?;

    match cli.command {
        Command::Render {
            page,
            select,
            toggle_sidebar,
            share,
        } => {
            let report = render(config, storage, page, select, toggle_sidebar, share)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Get => {
            let preference = LanguagePreference::load_with_key(storage, config.language.storage_key.as_str());
            println!("{}", preference.language());
        }
        Command::Set { language } => {
            let mut preference = LanguagePreference::load_with_key(storage, config.language.storage_key.as_str());
            preference.set(language).context("Failed to store language preference")?;
            tracing::info!(language = %language, "Language preference stored");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use theme_scripts::features::lang_toggle::Visibility;
    use theme_scripts::storage::PreferenceStorage;

    fn demo(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
    }

    fn store(dir: &tempfile::TempDir) -> FileStorage {
        FileStorage::new(dir.path().join("preferences.json"))
    }

    #[test]
    fn test_render_listing_with_selection() {
        let dir = tempfile::tempdir().expect("tempdir");
        let report = render(
            ThemeConfig::default(),
            store(&dir),
            demo("listing.toml"),
            Some(Language::En),
            true,
            Some("https://blog.example/".to_string()),
        )
        .expect("render");

        assert_eq!(report.language, Some(Language::En));
        assert_eq!(report.sidebar_expanded, Some(true));
        assert_eq!(
            report.outcome,
            Some(ToggleOutcome::Rendered {
                language: Language::En,
                visibility: Visibility { visible: 1, hidden: 2 },
            })
        );
        assert_eq!(report.page.location, None);

        let share = report.share.expect("share report");
        assert_eq!(share.method, Some(CopyMethod::Fallback));
        assert_eq!(share.feedback.title, "Link copied!");

        let stored = store(&dir).get_item("blog-language").expect("read");
        assert_eq!(stored.as_deref(), Some("en"));
    }

    #[test]
    fn test_render_listing_defaults_to_portuguese() {
        let dir = tempfile::tempdir().expect("tempdir");
        let report = render(
            ThemeConfig::default(),
            store(&dir),
            demo("listing.toml"),
            None,
            false,
            Some("https://blog.example/".to_string()),
        )
        .expect("render");

        assert_eq!(
            report.outcome,
            Some(ToggleOutcome::Rendered {
                language: Language::Pt,
                visibility: Visibility { visible: 2, hidden: 1 },
            })
        );
        assert_eq!(report.sidebar_expanded, Some(false));
        let share = report.share.expect("share report");
        assert_eq!(share.feedback.title, "Link copiado!");
    }

    #[test]
    fn test_render_post_leaves_page_on_conflict() {
        let dir = tempfile::tempdir().expect("tempdir");
        let report = render(
            ThemeConfig::default(),
            store(&dir),
            demo("post.toml"),
            Some(Language::Pt),
            false,
            Some("https://blog.example/posts/hello".to_string()),
        )
        .expect("render");

        assert_eq!(
            report.outcome,
            Some(ToggleOutcome::Navigated {
                language: Language::Pt,
                url: "/".to_string(),
            })
        );
        assert_eq!(report.page.location.as_deref(), Some("/"));
        assert_eq!(report.sidebar_expanded, None);

        let share = report.share.expect("share report");
        assert_eq!(share.method, Some(CopyMethod::ClipboardApi));
        assert_eq!(share.error, None);
        assert_eq!(share.feedback.title, "Link copied!");
    }

    #[test]
    fn test_render_post_without_selection_stays() {
        let dir = tempfile::tempdir().expect("tempdir");
        let report = render(ThemeConfig::default(), store(&dir), demo("post.toml"), None, false, None)
            .expect("render");

        assert_eq!(report.language, Some(Language::Pt));
        assert_eq!(report.outcome, None);
        assert_eq!(report.page.location, None);
        assert!(report.share.is_none());
    }

    #[test]
    fn test_render_missing_fixture_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = render(ThemeConfig::default(), store(&dir), demo("missing.toml"), None, false, None);
        assert!(result.is_err());
    }
}
