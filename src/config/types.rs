//! Configuration types for compliance-suite.

use super::defaults::{DEFAULT_GENERATION_DELAY_MS, DEFAULT_THEME, DEFAULT_TICK_RATE_MS};
use crate::model::{ReportKind, ViewId};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Top-level configuration, as read from `.compliance-suite.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SuiteConfig {
    /// Terminal UI settings
    pub tui: TuiConfig,
    /// Report generation settings
    pub reporting: ReportingConfig,
}

impl SuiteConfig {
    /// Apply command-line overrides on top of file values.
    pub fn apply_overrides(&mut self, view: Option<ViewId>, theme: Option<&str>) {
        if let Some(view) = view {
            self.tui.default_view = view;
        }
        if let Some(theme) = theme {
            self.tui.theme = theme.to_string();
        }
    }
}

// ============================================================================
// TUI Preferences (persisted separately from config)
// ============================================================================

/// User preferences remembered between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuiPreferences {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
}

impl Default for TuiPreferences {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

impl TuiPreferences {
    /// Get the path to the preferences file.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("compliance-suite").join("preferences.json"))
    }

    /// Load preferences from disk, if a preferences file exists.
    #[must_use]
    pub fn load() -> Option<Self> {
        Self::config_path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| serde_json::from_str(&s).ok())
    }

    /// Save preferences to disk.
    pub fn save(&self) -> std::io::Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let json = serde_json::to_string_pretty(self)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            std::fs::write(path, json)?;
        }
        Ok(())
    }
}

// ============================================================================
// TUI Configuration
// ============================================================================

/// TUI-specific configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
    /// View shown at startup
    pub default_view: ViewId,
    /// Interval between UI ticks in milliseconds (10-1000)
    pub tick_rate_ms: u64,
    /// Capture mouse events (wheel scrolls the table)
    pub mouse_enabled: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            default_view: ViewId::default(),
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            mouse_enabled: true,
        }
    }
}

impl TuiConfig {
    #[must_use]
    pub const fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

// ============================================================================
// Reporting Configuration
// ============================================================================

/// Settings for the simulated report generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ReportingConfig {
    /// Delay before a generation completes, in milliseconds (0-60000)
    pub generation_delay_ms: u64,
    /// Report type preselected in the picker (lcr, nsfr, sar, ctr, finra-4530)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_report_kind: Option<String>,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            generation_delay_ms: DEFAULT_GENERATION_DELAY_MS,
            default_report_kind: None,
        }
    }
}

impl ReportingConfig {
    #[must_use]
    pub const fn generation_delay(&self) -> Duration {
        Duration::from_millis(self.generation_delay_ms)
    }

    /// Parsed preselected report kind; invalid names are reported by
    /// validation and treated as no selection here.
    #[must_use]
    pub fn report_kind(&self) -> Option<ReportKind> {
        self.default_report_kind
            .as_deref()
            .and_then(|k| k.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: SuiteConfig = serde_yaml::from_str("tui:\n  theme: light\n").unwrap();
        assert_eq!(config.tui.theme, "light");
        assert_eq!(config.tui.tick_rate_ms, DEFAULT_TICK_RATE_MS);
        assert_eq!(config.reporting, ReportingConfig::default());
    }

    #[test]
    fn test_overrides_take_precedence() {
        let mut config = SuiteConfig::default();
        config.apply_overrides(Some(ViewId::Fraud), Some("high-contrast"));
        assert_eq!(config.tui.default_view, ViewId::Fraud);
        assert_eq!(config.tui.theme, "high-contrast");

        config.apply_overrides(None, None);
        assert_eq!(config.tui.default_view, ViewId::Fraud);
    }

    #[test]
    fn test_report_kind_parsing() {
        let mut reporting = ReportingConfig::default();
        assert_eq!(reporting.report_kind(), None);
        reporting.default_report_kind = Some("finra-4530".to_string());
        assert_eq!(reporting.report_kind(), Some(ReportKind::Finra4530));
        reporting.default_report_kind = Some("bogus".to_string());
        assert_eq!(reporting.report_kind(), None);
    }
}
