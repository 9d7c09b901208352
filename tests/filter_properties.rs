//! Property tests for filtering and metrics over generated tables.

use compliance_suite::model::{AnomalyRecord, AnomalyStatus, Severity, Variant};
use compliance_suite::query::{breakdown, count_by, filter_records, percentage, FilterChoice};
use chrono::NaiveDate;
use proptest::prelude::*;

fn severity() -> impl Strategy<Value = Severity> {
    prop::sample::select(Severity::ALL.to_vec())
}

fn status() -> impl Strategy<Value = AnomalyStatus> {
    prop::sample::select(AnomalyStatus::ALL.to_vec())
}

fn table() -> impl Strategy<Value = Vec<AnomalyRecord>> {
    prop::collection::vec((severity(), status()), 0..40).prop_map(|rows| {
        let timestamp = NaiveDate::from_ymd_opt(2025, 10, 6)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap();
        rows.into_iter()
            .enumerate()
            .map(|(i, (severity, status))| AnomalyRecord {
                id: format!("A{i:03}"),
                timestamp,
                severity,
                summary: format!("generated anomaly {i}"),
                system: "Test".to_string(),
                reg_tags: Vec::new(),
                status,
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn all_is_identity(rows in table()) {
        let filtered = filter_records(&rows, FilterChoice::<Severity>::All);
        prop_assert_eq!(filtered.len(), rows.len());
        for (kept, original) in filtered.iter().zip(&rows) {
            prop_assert_eq!(&kept.id, &original.id);
        }
    }

    #[test]
    fn variants_partition_the_table(rows in table()) {
        let mut total = 0;
        for &severity in Severity::ALL {
            let subset = filter_records(&rows, FilterChoice::Only(severity));
            prop_assert!(subset.iter().all(|r| r.severity == severity));
            total += subset.len();
        }
        prop_assert_eq!(total, rows.len());
    }

    #[test]
    fn filtering_preserves_order(rows in table(), wanted in status()) {
        let subset = filter_records(&rows, FilterChoice::Only(wanted));
        let positions: Vec<usize> = subset
            .iter()
            .map(|r| rows.iter().position(|o| o.id == r.id).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn counts_and_shares_are_consistent(rows in table()) {
        let counts = count_by::<_, Severity>(&rows);
        prop_assert_eq!(counts.values().sum::<usize>(), rows.len());

        let shares = breakdown::<_, Severity>(&rows);
        prop_assert_eq!(shares.len(), Severity::ALL.len());
        for share in &shares {
            prop_assert!(!share.percent.is_nan());
            prop_assert!((0.0..=100.0).contains(&share.percent));
        }
        if !rows.is_empty() {
            let sum: f64 = shares.iter().map(|s| s.percent).sum();
            prop_assert!((sum - 100.0).abs() < 1e-6);
        }
    }

    #[test]
    fn percentage_never_nan(part in 0usize..1000, total in 0usize..1000) {
        let p = percentage(part, total);
        prop_assert!(!p.is_nan());
        if total == 0 {
            prop_assert_eq!(p, 0.0);
        }
    }

    #[test]
    fn parse_rejects_unknown_values(value in "[a-z]{3,12}") {
        let known = value == "all" || Severity::lookup(&value).is_ok();
        prop_assert_eq!(FilterChoice::<Severity>::parse(&value).is_ok(), known);
    }
}
