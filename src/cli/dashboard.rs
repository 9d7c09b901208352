//! Dashboard command handler: launches the interactive TUI.

use super::exit_codes;
use crate::config::{SuiteConfig, TuiPreferences, Validatable};
use crate::model::Dataset;
use crate::tui::{run_tui, set_theme, AppSettings, SuiteApp, Theme};
use anyhow::{Context, Result};

/// Run the dashboard with an already-merged configuration.
///
/// `theme_pinned` is set when the theme came from the command line; the
/// saved preference from the last session is used otherwise.
pub fn run_dashboard(config: &SuiteConfig, theme_pinned: bool) -> Result<i32> {
    let errors = config.validate();
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("config error: {error}");
        }
        return Ok(exit_codes::USAGE);
    }

    let theme = if theme_pinned {
        config.tui.theme.clone()
    } else {
        TuiPreferences::load().map_or_else(|| config.tui.theme.clone(), |prefs| prefs.theme)
    };
    set_theme(Theme::from_name(&theme));

    let data = Dataset::builtin().context("built-in dataset is inconsistent")?;
    let settings = AppSettings::from_config(config);
    tracing::info!(view = %settings.initial_view, theme = %theme, "starting dashboard");

    let mut app = SuiteApp::new(data, settings);
    run_tui(&mut app).context("terminal UI failed")?;
    Ok(exit_codes::SUCCESS)
}
