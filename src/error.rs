//! Unified error types for compliance-suite.
//!
//! Every fallible library operation returns [`Result`]; the binary wraps
//! these in `anyhow` at the command boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for compliance-suite operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SuiteError {
    /// A view identifier outside the fixed set of dashboard views
    #[error("Unknown view '{0}' (expected one of: audit, reporting, aml, fraud, ekyc)")]
    InvalidView(String),

    /// A filter value outside the enumeration of the filtered field
    #[error("Invalid {field} filter '{value}' (expected: {expected})")]
    InvalidFilter {
        field: &'static str,
        value: String,
        expected: String,
    },

    /// The report generation control was invoked without a report type
    #[error("Report generation is disabled: no report type selected")]
    ActionDisabled,

    /// A report generation is already running
    #[error("Report generation already in progress: {0}")]
    ActionBusy(String),

    /// Dataset invariant violations
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON/YAML serialization errors
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for compliance-suite operations
pub type Result<T> = std::result::Result<T, SuiteError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl SuiteError {
    /// Create an invalid filter error listing the accepted values
    pub fn invalid_filter(
        field: &'static str,
        value: impl Into<String>,
        expected: &[&str],
    ) -> Self {
        Self::InvalidFilter {
            field,
            value: value.into(),
            expected: expected.join(", "),
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether the error comes from user input rather than the environment.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidView(_)
                | Self::InvalidFilter { .. }
                | Self::ActionDisabled
                | Self::ActionBusy(_)
                | Self::Config(_)
        )
    }
}

impl From<std::io::Error> for SuiteError {
    fn from(err: std::io::Error) -> Self {
        let message = format!("{err}");
        Self::Io {
            path: None,
            message,
            source: err,
        }
    }
}

impl From<serde_json::Error> for SuiteError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_lists_expected_values() {
        let err = SuiteError::invalid_filter("severity", "medium", &["all", "critical", "high", "low"]);
        let msg = err.to_string();
        assert!(msg.contains("severity"));
        assert!(msg.contains("'medium'"));
        assert!(msg.contains("all, critical, high, low"));
        assert!(err.is_user_error());
    }

    #[test]
    fn test_io_error_keeps_path() {
        let err = SuiteError::io(
            "/tmp/missing.yaml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        match &err {
            SuiteError::Io { path, .. } => {
                assert_eq!(path.as_deref(), Some(std::path::Path::new("/tmp/missing.yaml")));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
        assert!(!err.is_user_error());
    }
}
