//! Identifiers of the top-level dashboard views.

use crate::error::SuiteError;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One of the five fixed dashboard views.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum ViewId {
    /// AI audit log analyzer
    #[default]
    Audit,
    /// Regulatory reporting assistant
    Reporting,
    /// AML & sanctions screener
    Aml,
    /// Fraud detection & transaction monitoring
    Fraud,
    /// eKYC & document verification
    Ekyc,
}

impl ViewId {
    /// Every view in tab-bar order.
    pub const ALL: [Self; 5] = [
        Self::Audit,
        Self::Reporting,
        Self::Aml,
        Self::Fraud,
        Self::Ekyc,
    ];

    /// Stable identifier used on the command line and in config files.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Audit => "audit",
            Self::Reporting => "reporting",
            Self::Aml => "aml",
            Self::Fraud => "fraud",
            Self::Ekyc => "ekyc",
        }
    }

    /// Short label for the tab bar.
    #[must_use]
    pub const fn tab_label(self) -> &'static str {
        match self {
            Self::Audit => "Audit Log",
            Self::Reporting => "Reporting",
            Self::Aml => "AML & Sanctions",
            Self::Fraud => "Fraud",
            Self::Ekyc => "eKYC",
        }
    }

    /// Heading rendered at the top of the view.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Audit => "AI Audit Log Analyzer Dashboard",
            Self::Reporting => "Regulatory Reporting Assistant Dashboard",
            Self::Aml => "AML & Sanctions AI Screener",
            Self::Fraud => "AI Fraud Detection & Transaction Monitoring",
            Self::Ekyc => "AI-Powered eKYC & Document Verification",
        }
    }

    /// Zero-based position in the tab bar.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Audit => 0,
            Self::Reporting => 1,
            Self::Aml => 2,
            Self::Fraud => 3,
            Self::Ekyc => 4,
        }
    }

    /// View for a zero-based tab position.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for ViewId {
    type Err = SuiteError;

    /// Accepts the view key (`aml`) or its one-based tab number (`3`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if let Ok(number) = wanted.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(Self::from_index)
                .ok_or_else(|| SuiteError::InvalidView(s.to_string()));
        }
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SuiteError::InvalidView(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps_both_ways() {
        assert_eq!(ViewId::Ekyc.next(), ViewId::Audit);
        assert_eq!(ViewId::Audit.prev(), ViewId::Ekyc);
        let mut view = ViewId::Audit;
        for _ in 0..ViewId::ALL.len() {
            view = view.next();
        }
        assert_eq!(view, ViewId::Audit);
    }

    #[test]
    fn test_parse_keys_and_numbers() {
        assert_eq!("fraud".parse::<ViewId>().ok(), Some(ViewId::Fraud));
        assert_eq!("EKYC".parse::<ViewId>().ok(), Some(ViewId::Ekyc));
        assert_eq!("1".parse::<ViewId>().ok(), Some(ViewId::Audit));
        assert_eq!("5".parse::<ViewId>().ok(), Some(ViewId::Ekyc));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for bad in ["0", "6", "settings", ""] {
            assert!(
                matches!(bad.parse::<ViewId>(), Err(SuiteError::InvalidView(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_index_round_trip() {
        for view in ViewId::ALL {
            assert_eq!(ViewId::from_index(view.index()), Some(view));
        }
    }
}
