//! Configuration validation.

use super::defaults::{GENERATION_DELAY_RANGE_MS, TICK_RATE_RANGE_MS};
use super::types::{ReportingConfig, SuiteConfig, TuiConfig};
use crate::model::{ReportKind, Variant};
use crate::tui::Theme;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for SuiteConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = self.tui.validate();
        errors.extend(self.reporting.validate());
        errors
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !Theme::is_known(&self.theme) {
            errors.push(ConfigError {
                field: "tui.theme".to_string(),
                message: format!(
                    "Invalid theme '{}'. Valid options: {}",
                    self.theme,
                    Theme::NAMES.join(", ")
                ),
            });
        }

        if !TICK_RATE_RANGE_MS.contains(&self.tick_rate_ms) {
            errors.push(ConfigError {
                field: "tui.tick_rate_ms".to_string(),
                message: format!(
                    "Tick rate must be between {} and {} ms, got {}",
                    TICK_RATE_RANGE_MS.start(),
                    TICK_RATE_RANGE_MS.end(),
                    self.tick_rate_ms
                ),
            });
        }

        errors
    }
}

impl Validatable for ReportingConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !GENERATION_DELAY_RANGE_MS.contains(&self.generation_delay_ms) {
            errors.push(ConfigError {
                field: "reporting.generation_delay_ms".to_string(),
                message: format!(
                    "Generation delay must be between {} and {} ms, got {}",
                    GENERATION_DELAY_RANGE_MS.start(),
                    GENERATION_DELAY_RANGE_MS.end(),
                    self.generation_delay_ms
                ),
            });
        }

        if let Some(kind) = &self.default_report_kind {
            if kind.parse::<ReportKind>().is_err() {
                errors.push(ConfigError {
                    field: "reporting.default_report_kind".to_string(),
                    message: format!(
                        "Invalid report type '{}'. Valid options: {}",
                        kind,
                        ReportKind::keys().join(", ")
                    ),
                });
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SuiteConfig::default().is_valid());
    }

    #[test]
    fn test_tui_config_validation() {
        let config = TuiConfig {
            theme: "solarized".to_string(),
            tick_rate_ms: 5,
            ..TuiConfig::default()
        };
        let errors = config.validate();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["tui.theme", "tui.tick_rate_ms"]);
    }

    #[test]
    fn test_tick_rate_bounds_inclusive() {
        for tick_rate_ms in [10, 1000] {
            let config = TuiConfig {
                tick_rate_ms,
                ..TuiConfig::default()
            };
            assert!(config.is_valid(), "{tick_rate_ms} should be accepted");
        }
    }

    #[test]
    fn test_reporting_config_validation() {
        let config = ReportingConfig {
            generation_delay_ms: 60_001,
            default_report_kind: Some("xbrl".to_string()),
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 2);
        assert!(errors[1].message.contains("lcr, nsfr, sar, ctr, finra-4530"));

        let zero_delay = ReportingConfig {
            generation_delay_ms: 0,
            default_report_kind: Some("sar".to_string()),
        };
        assert!(zero_delay.is_valid());
    }
}
