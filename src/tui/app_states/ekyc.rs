//! eKYC verification tab state.

use crate::model::{Dataset, VerificationCaseRecord, VerificationStatus};
use crate::query::{filter_records, FilterChoice};
use crate::tui::state::ListState;
use crate::tui::traits::ViewState;
use crate::tui::viewmodel::FilterState;

#[derive(Debug, Clone, Default)]
pub struct EkycState {
    pub status: FilterState<FilterChoice<VerificationStatus>>,
    pub table: ListState,
}

impl EkycState {
    pub fn rows<'a>(&self, data: &'a Dataset) -> Vec<&'a VerificationCaseRecord> {
        filter_records(&data.verification_cases, self.status.current)
    }

    /// The highlighted case, shown in the detail panel.
    pub fn selected_case<'a>(&self, data: &'a Dataset) -> Option<&'a VerificationCaseRecord> {
        self.rows(data).get(self.table.selected).copied()
    }
}

impl ViewState for EkycState {
    fn cycle_filter(&mut self, forward: bool) {
        if forward {
            self.status.next();
        } else {
            self.status.prev();
        }
    }

    fn visible_rows(&self, data: &Dataset) -> usize {
        self.rows(data).len()
    }

    fn filter_summary(&self) -> Vec<(&'static str, String)> {
        vec![("status", self.status.display_name().to_string())]
    }

    fn table(&self) -> &ListState {
        &self.table
    }

    fn table_mut(&mut self) -> &mut ListState {
        &mut self.table
    }
}
