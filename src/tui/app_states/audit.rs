//! Audit log tab state.

use crate::model::{AnomalyRecord, AnomalyStatus, Dataset, Severity};
use crate::query::{filter_iter, FilterChoice};
use crate::tui::state::ListState;
use crate::tui::traits::ViewState;
use crate::tui::viewmodel::FilterState;

#[derive(Debug, Clone, Default)]
pub struct AuditState {
    pub severity: FilterState<FilterChoice<Severity>>,
    pub status: FilterState<FilterChoice<AnomalyStatus>>,
    pub table: ListState,
}

impl AuditState {
    /// Anomalies passing both filters, in table order.
    pub fn rows<'a>(&self, data: &'a Dataset) -> Vec<&'a AnomalyRecord> {
        let status = self.status.current;
        filter_iter(&data.anomalies, self.severity.current)
            .filter(|r| status.matches(r.status))
            .collect()
    }
}

impl ViewState for AuditState {
    fn cycle_filter(&mut self, forward: bool) {
        if forward {
            self.severity.next();
        } else {
            self.severity.prev();
        }
    }

    fn cycle_secondary_filter(&mut self) {
        self.status.next();
    }

    fn visible_rows(&self, data: &Dataset) -> usize {
        self.rows(data).len()
    }

    fn filter_summary(&self) -> Vec<(&'static str, String)> {
        vec![
            ("severity", self.severity.display_name().to_string()),
            ("status", self.status.display_name().to_string()),
        ]
    }

    fn table(&self) -> &ListState {
        &self.table
    }

    fn table_mut(&mut self) -> &mut ListState {
        &mut self.table
    }
}
