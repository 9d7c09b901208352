//! Record types and the built-in dataset behind every dashboard view.
//!
//! Each view renders one fixed table of typed records plus a summary
//! record for its KPI cards. Nothing here is mutated after construction.
//!
//! Status, severity and level fields are closed enumerations implementing
//! [`Variant`], which gives every one of them the same parsing and display
//! behaviour: a human label (`In Progress`) and a kebab-case key
//! (`in-progress`), both accepted case-insensitively.

mod aml;
mod audit;
mod dataset;
mod ekyc;
mod fraud;
mod reporting;
mod view;

pub use aml::{MatchStatus, RiskLevel, RiskSummary, SanctionMatchRecord};
pub use audit::{AnomalyRecord, AnomalyStatus, AuditKpis, Severity, TrendPoint};
pub use dataset::Dataset;
pub use ekyc::{EkycSummary, VerificationCaseRecord, VerificationStatus};
pub use fraud::{AdaptiveLearning, AlertStatus, FraudSummary, TransactionAlertRecord, TransactionType};
pub use reporting::{ReportCadence, ReportKind, ReportRecord, ReportStatus, ReportingKpis};
pub use view::ViewId;

use crate::error::{Result, SuiteError};

/// A closed enumeration used as a record field.
///
/// `ALL` lists the variants in display order; filters and per-category
/// counts iterate it so that every variant is always accounted for.
pub trait Variant: Copy + Eq + std::hash::Hash + std::fmt::Debug + 'static {
    /// Field name used in error messages (e.g. "severity").
    const FIELD: &'static str;

    /// Every variant, in display order.
    const ALL: &'static [Self];

    /// Human-readable label as shown in tables.
    fn label(self) -> &'static str;

    /// Stable kebab-case identifier accepted on the command line.
    fn key(self) -> &'static str;

    /// Parse a label or key, case-insensitively.
    fn lookup(value: &str) -> Result<Self> {
        let wanted = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.label().eq_ignore_ascii_case(wanted) || v.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SuiteError::invalid_filter(Self::FIELD, value, &Self::keys()))
    }

    /// All accepted keys, in display order.
    fn keys() -> Vec<&'static str> {
        Self::ALL.iter().map(|v| v.key()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_accepts_label_and_key() {
        assert_eq!(AnomalyStatus::lookup("In Progress").ok(), Some(AnomalyStatus::InProgress));
        assert_eq!(AnomalyStatus::lookup("in-progress").ok(), Some(AnomalyStatus::InProgress));
        assert_eq!(AnomalyStatus::lookup("  OPEN ").ok(), Some(AnomalyStatus::Open));
    }

    #[test]
    fn test_lookup_rejects_out_of_domain() {
        let err = Severity::lookup("medium").unwrap_err();
        assert!(matches!(err, SuiteError::InvalidFilter { field: "severity", .. }));
    }

    #[test]
    fn test_keys_follow_display_order() {
        assert_eq!(Severity::keys(), vec!["critical", "high", "low"]);
        assert_eq!(
            VerificationStatus::keys(),
            vec!["verified", "pending", "rejected", "fraud-alert"]
        );
    }
}
