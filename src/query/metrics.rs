//! Scalar summaries for KPI cards and charts.

use super::filter::{filter_iter, FilterChoice, Filterable};
use crate::model::Variant;
use indexmap::IndexMap;
use serde::Serialize;

/// Count and share of one category within a table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryShare<K> {
    pub key: K,
    pub count: usize,
    pub percent: f64,
}

/// Number of records whose field equals `key`.
pub fn count_matching<R, K>(table: &[R], key: K) -> usize
where
    R: Filterable<K>,
    K: Variant,
{
    filter_iter(table, FilterChoice::Only(key)).count()
}

/// Per-variant counts in display order, zeros included.
pub fn count_by<R, K>(table: &[R]) -> IndexMap<K, usize>
where
    R: Filterable<K>,
    K: Variant,
{
    let mut counts: IndexMap<K, usize> = K::ALL.iter().map(|k| (*k, 0)).collect();
    for record in table {
        *counts.entry(record.filter_key()).or_insert(0) += 1;
    }
    counts
}

/// `part / total * 100`, or `0.0` for an empty total.
#[must_use]
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Percentage of records whose field equals `key`.
pub fn share_of<R, K>(table: &[R], key: K) -> f64
where
    R: Filterable<K>,
    K: Variant,
{
    percentage(count_matching(table, key), table.len())
}

/// Count and percentage for every variant, in display order.
pub fn breakdown<R, K>(table: &[R]) -> Vec<CategoryShare<K>>
where
    R: Filterable<K>,
    K: Variant,
{
    let total = table.len();
    count_by(table)
        .into_iter()
        .map(|(key, count)| CategoryShare {
            key,
            count,
            percent: percentage(count, total),
        })
        .collect()
}

/// Largest value, used as the full-height reference for bar charts.
pub fn max_value(values: impl IntoIterator<Item = u32>) -> Option<u32> {
    values.into_iter().max()
}

/// `value / max` as a fraction in `0.0..=1.0`; `0.0` when `max` is zero.
#[must_use]
pub fn scale(value: u32, max: u32) -> f64 {
    if max == 0 {
        0.0
    } else {
        (f64::from(value) / f64::from(max)).min(1.0)
    }
}

/// Arithmetic mean, `None` for an empty input.
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        None
    } else {
        Some(sum / n as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnomalyRecord, Dataset, RiskLevel, Severity, VerificationStatus};

    #[test]
    fn test_percentage_zero_total() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(5, 0), 0.0);
        assert!(!percentage(0, 0).is_nan());
    }

    #[test]
    fn test_share_of_empty_table() {
        let empty: Vec<AnomalyRecord> = Vec::new();
        assert_eq!(share_of(&empty, Severity::Critical), 0.0);
        assert!(breakdown::<_, Severity>(&empty).iter().all(|s| s.count == 0 && s.percent == 0.0));
    }

    #[test]
    fn test_count_by_includes_zero_categories() {
        let data = Dataset::builtin().unwrap();
        let counts = count_by::<_, VerificationStatus>(&data.verification_cases);
        let keys: Vec<_> = counts.keys().copied().collect();
        assert_eq!(keys, VerificationStatus::ALL);
        assert_eq!(counts[&VerificationStatus::Verified], 2);
        assert_eq!(counts[&VerificationStatus::FraudAlert], 1);
        assert_eq!(counts.values().sum::<usize>(), data.verification_cases.len());
    }

    #[test]
    fn test_breakdown_percentages() {
        let data = Dataset::builtin().unwrap();
        let shares = breakdown::<_, RiskLevel>(&data.sanction_matches);
        assert_eq!(shares.len(), 3);
        assert_eq!(shares[0].key, RiskLevel::High);
        assert_eq!(shares[0].count, 2);
        assert!((shares[0].percent - 40.0).abs() < 1e-9);
        let total: f64 = shares.iter().map(|s| s.percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_scale_against_max() {
        let data = Dataset::builtin().unwrap();
        let max = max_value(data.anomaly_trend.iter().map(|p| p.count)).unwrap();
        assert_eq!(max, 35);
        assert_eq!(scale(35, max), 1.0);
        assert_eq!(scale(0, max), 0.0);
        assert_eq!(scale(10, 0), 0.0);
        assert_eq!(max_value(std::iter::empty::<u32>()), None);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(Vec::<f64>::new()), None);
        assert_eq!(mean(vec![10.0, 20.0, 30.0]), Some(20.0));
    }
}
