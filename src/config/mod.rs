//! Configuration for compliance-suite.
//!
//! - Type-safe configuration structures with defaults
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - Command-line overrides
//! - Persisted TUI preferences (theme)
//!
//! # Configuration File
//!
//! Place a `.compliance-suite.yaml` file in the working directory or at
//! `~/.config/compliance-suite/config.yaml`:
//!
//! ```yaml
//! tui:
//!   theme: light
//!   default_view: reporting
//! reporting:
//!   generation_delay_ms: 1500
//!   default_report_kind: lcr
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    DEFAULT_GENERATION_DELAY_MS, DEFAULT_THEME, DEFAULT_TICK_RATE_MS, GENERATION_DELAY_RANGE_MS,
    TICK_RATE_RANGE_MS,
};
pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError,
};
pub use types::{ReportingConfig, SuiteConfig, TuiConfig, TuiPreferences};
pub use validation::{ConfigError, Validatable};

/// Generate a JSON Schema for the `SuiteConfig` configuration format.
///
/// Editors can use it to validate and autocomplete config files.
pub fn generate_json_schema() -> crate::error::Result<String> {
    let schema = schemars::schema_for!(SuiteConfig);
    serde_json::to_string_pretty(&schema).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_names_sections() {
        let schema = generate_json_schema().unwrap();
        assert!(schema.contains("\"tui\""));
        assert!(schema.contains("generation_delay_ms"));
    }
}
