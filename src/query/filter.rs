//! Enumerated-field filtering of record tables.

use crate::error::{Result, SuiteError};
use crate::model::{
    AlertStatus, AnomalyRecord, AnomalyStatus, MatchStatus, ReportRecord, ReportStatus, RiskLevel,
    SanctionMatchRecord, Severity, TransactionAlertRecord, TransactionType, Variant,
    VerificationCaseRecord, VerificationStatus,
};

/// A record that can be filtered on an enumerated field of type `K`.
///
/// A record type may implement this for several keys, e.g. anomalies can be
/// filtered by [`Severity`] or by [`AnomalyStatus`].
pub trait Filterable<K: Variant> {
    fn filter_key(&self) -> K;
}

/// Filter selection: everything, or one variant of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterChoice<K> {
    All,
    Only(K),
}

impl<K> Default for FilterChoice<K> {
    fn default() -> Self {
        Self::All
    }
}

impl<K: Variant> FilterChoice<K> {
    /// Sentinel accepted for [`FilterChoice::All`].
    pub const ALL_KEY: &'static str = "all";

    /// Parse `all` or one of the field's labels/keys.
    ///
    /// Values outside the enumeration are rejected with
    /// [`SuiteError::InvalidFilter`].
    pub fn parse(value: &str) -> Result<Self> {
        if value.trim().eq_ignore_ascii_case(Self::ALL_KEY) {
            return Ok(Self::All);
        }
        K::lookup(value).map(Self::Only).map_err(|_| {
            let mut expected = vec![Self::ALL_KEY];
            expected.extend(K::keys());
            SuiteError::invalid_filter(K::FIELD, value, &expected)
        })
    }

    /// Whether a record with `key` passes this filter.
    #[must_use]
    pub fn matches(self, key: K) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == key,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(k) => k.label(),
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::All => Self::ALL_KEY,
            Self::Only(k) => k.key(),
        }
    }

    /// `All` followed by every variant, in display order.
    #[must_use]
    pub fn options() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(K::ALL.iter().copied().map(Self::Only))
            .collect()
    }
}

/// Lazily yield the records passing `choice`, in table order.
pub fn filter_iter<'a, R, K>(
    table: &'a [R],
    choice: FilterChoice<K>,
) -> impl Iterator<Item = &'a R> + 'a
where
    R: Filterable<K>,
    K: Variant,
{
    table.iter().filter(move |r| choice.matches(r.filter_key()))
}

/// Records passing `choice`, in table order.
///
/// `All` returns the whole table; a variant no record carries yields an
/// empty vector.
pub fn filter_records<R, K>(table: &[R], choice: FilterChoice<K>) -> Vec<&R>
where
    R: Filterable<K>,
    K: Variant,
{
    filter_iter(table, choice).collect()
}

// ============================================================================
// Record implementations
// ============================================================================

impl Filterable<Severity> for AnomalyRecord {
    fn filter_key(&self) -> Severity {
        self.severity
    }
}

impl Filterable<AnomalyStatus> for AnomalyRecord {
    fn filter_key(&self) -> AnomalyStatus {
        self.status
    }
}

impl Filterable<ReportStatus> for ReportRecord {
    fn filter_key(&self) -> ReportStatus {
        self.status
    }
}

impl Filterable<RiskLevel> for SanctionMatchRecord {
    fn filter_key(&self) -> RiskLevel {
        self.risk_level
    }
}

impl Filterable<MatchStatus> for SanctionMatchRecord {
    fn filter_key(&self) -> MatchStatus {
        self.status
    }
}

impl Filterable<AlertStatus> for TransactionAlertRecord {
    fn filter_key(&self) -> AlertStatus {
        self.status
    }
}

impl Filterable<TransactionType> for TransactionAlertRecord {
    fn filter_key(&self) -> TransactionType {
        self.kind
    }
}

impl Filterable<VerificationStatus> for VerificationCaseRecord {
    fn filter_key(&self) -> VerificationStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Dataset;

    fn ids(records: &[&AnomalyRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_all_returns_whole_table_in_order() {
        let data = Dataset::builtin().unwrap();
        let all = filter_records(&data.anomalies, FilterChoice::<Severity>::All);
        assert_eq!(ids(&all), ["A001", "A002", "A003"]);
    }

    #[test]
    fn test_critical_returns_a001_only() {
        let data = Dataset::builtin().unwrap();
        let critical = filter_records(&data.anomalies, FilterChoice::Only(Severity::Critical));
        assert_eq!(ids(&critical), ["A001"]);
    }

    #[test]
    fn test_unmatched_variant_is_empty() {
        let data = Dataset::builtin().unwrap();
        let non_pending: Vec<_> = data
            .verification_cases
            .iter()
            .filter(|c| c.status != VerificationStatus::Pending)
            .cloned()
            .collect();
        let pending = filter_records(&non_pending, FilterChoice::Only(VerificationStatus::Pending));
        assert!(pending.is_empty());
    }

    #[test]
    fn test_same_table_two_keys() {
        let data = Dataset::builtin().unwrap();
        let new = filter_records(&data.sanction_matches, FilterChoice::Only(MatchStatus::New));
        let high = filter_records(&data.sanction_matches, FilterChoice::Only(RiskLevel::High));
        assert_eq!(new.len(), 3);
        assert_eq!(high.len(), 2);
    }

    #[test]
    fn test_parse_all_and_variants() {
        assert_eq!(FilterChoice::<Severity>::parse("ALL").ok(), Some(FilterChoice::All));
        assert_eq!(
            FilterChoice::<AlertStatus>::parse("flagged").ok(),
            Some(FilterChoice::Only(AlertStatus::Flagged))
        );
        assert_eq!(
            FilterChoice::<TransactionType>::parse("Loan App").ok(),
            Some(FilterChoice::Only(TransactionType::LoanApp))
        );
    }

    #[test]
    fn test_parse_rejects_out_of_domain() {
        let err = FilterChoice::<Severity>::parse("medium").unwrap_err();
        match err {
            SuiteError::InvalidFilter { field, value, expected } => {
                assert_eq!(field, "severity");
                assert_eq!(value, "medium");
                assert_eq!(expected, "all, critical, high, low");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_options_start_with_all() {
        let options = FilterChoice::<RiskLevel>::options();
        assert_eq!(options.len(), 4);
        assert_eq!(options[0], FilterChoice::All);
        assert_eq!(options[3], FilterChoice::Only(RiskLevel::Low));
    }
}
