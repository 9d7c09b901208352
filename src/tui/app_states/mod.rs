//! Per-tab UI state.
//!
//! Each tab owns its filters, its table selection and, for reporting, the
//! Generate control. `SuiteApp` replaces a tab's state with a fresh value
//! when the user navigates away from it.

mod aml;
mod audit;
mod ekyc;
mod fraud;
mod reporting;

pub use aml::AmlState;
pub use audit::AuditState;
pub use ekyc::EkycState;
pub use fraud::FraudState;
pub use reporting::ReportingState;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dataset, Severity, TransactionType};
    use crate::query::FilterChoice;
    use crate::tui::traits::ViewState;
    use std::time::Duration;

    #[test]
    fn test_audit_filters_combine() {
        let data = Dataset::builtin().unwrap();
        let mut state = AuditState::default();
        assert_eq!(state.visible_rows(&data), 3);

        state.cycle_filter(true);
        assert_eq!(state.severity.current, FilterChoice::Only(Severity::Critical));
        let ids: Vec<_> = state.rows(&data).iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["A001"]);
    }

    #[test]
    fn test_selection_clamped_after_filter() {
        let data = Dataset::builtin().unwrap();
        let mut state = FraudState::default();
        state.sync_rows(&data);
        state.go_last();
        assert_eq!(state.table().selected, data.transaction_alerts.len() - 1);

        state.kind.set(FilterChoice::Only(TransactionType::LoanApp));
        state.sync_rows(&data);
        assert!(state.table().selected < state.visible_rows(&data).max(1));
    }

    #[test]
    fn test_single_filter_tab_ignores_secondary() {
        let data = Dataset::builtin().unwrap();
        let mut state = EkycState::default();
        state.cycle_secondary_filter();
        assert_eq!(state.visible_rows(&data), data.verification_cases.len());
        assert_eq!(state.filter_summary(), vec![("status", "All".to_string())]);
    }

    #[test]
    fn test_reporting_rows_follow_status_filter() {
        let data = Dataset::builtin().unwrap();
        let mut state = ReportingState::new(None, Duration::from_millis(10));
        let total = state.visible_rows(&data);
        state.cycle_filter(false);
        assert!(state.visible_rows(&data) <= total);
        assert!(!state.generate.is_enabled());
    }

    #[test]
    fn test_ekyc_selected_case_tracks_table() {
        let data = Dataset::builtin().unwrap();
        let mut state = EkycState::default();
        state.sync_rows(&data);
        state.select_next();
        assert_eq!(
            state.selected_case(&data).map(|c| c.case_id.as_str()),
            Some(data.verification_cases[1].case_id.as_str())
        );
    }
}
