//! Configuration file loading and discovery.

use super::types::SuiteConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Config file names searched for in the current directory.
const CONFIG_FILE_NAMES: &[&str] = &[".compliance-suite.yaml", ".compliance-suite.yml"];

/// Directory under the user config dir holding the global config.
const CONFIG_DIR_NAME: &str = "compliance-suite";

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. User config directory (`~/.config/compliance-suite/config.yaml`)
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }

    if let Some(path) = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_in_dir(&cwd))
    {
        return Some(path);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join("config.yaml"))
        .filter(|path| path.exists())
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load a `SuiteConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<SuiteConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    // An empty file deserializes to unit, not to an all-default struct.
    if content.trim().is_empty() {
        return Ok(SuiteConfig::default());
    }
    Ok(serde_yaml::from_str(&content)?)
}

/// Load config from the discovered file, or return defaults.
///
/// Load failures are logged and fall back to defaults; the returned path
/// is `None` in that case.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (SuiteConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (SuiteConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (SuiteConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    let example = SuiteConfig::default();
    format!(
        r"# compliance-suite configuration
# Place this file at .compliance-suite.yaml in the working directory or
# ~/.config/compliance-suite/config.yaml

{}",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ViewId;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "tui:\n  default_view: aml\nreporting:\n  generation_delay_ms: 500\n  default_report_kind: sar"
        )
        .unwrap();

        let config = load_config_file(file.path()).unwrap();
        assert_eq!(config.tui.default_view, ViewId::Aml);
        assert_eq!(config.reporting.generation_delay_ms, 500);
        assert_eq!(config.reporting.default_report_kind.as_deref(), Some("sar"));
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        let file = NamedTempFile::new().unwrap();
        let config = load_config_file(file.path()).unwrap();
        assert_eq!(config, SuiteConfig::default());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        assert!(matches!(
            load_config_file(&path),
            Err(ConfigFileError::NotFound(_))
        ));
    }

    #[test]
    fn test_load_or_default_falls_back_on_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "tui:\n  default_view: settings").unwrap();

        let (config, loaded_from) = load_or_default(Some(file.path()));
        assert_eq!(config, SuiteConfig::default());
        assert!(loaded_from.is_none());
    }

    #[test]
    fn test_example_config_parses() {
        let example = generate_example_config();
        let parsed: SuiteConfig = serde_yaml::from_str(&example).unwrap();
        assert_eq!(parsed, SuiteConfig::default());
    }
}
