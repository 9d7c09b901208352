//! Regulatory reporting tab state, including the Generate control.

use crate::model::{Dataset, ReportKind, ReportRecord, ReportStatus};
use crate::query::{filter_records, FilterChoice};
use crate::tui::state::ListState;
use crate::tui::task::GenerateAction;
use crate::tui::traits::ViewState;
use crate::tui::viewmodel::FilterState;
use std::time::Duration;

#[derive(Debug)]
pub struct ReportingState {
    pub status: FilterState<FilterChoice<ReportStatus>>,
    pub table: ListState,
    pub generate: GenerateAction,
}

impl ReportingState {
    pub fn new(default_kind: Option<ReportKind>, delay: Duration) -> Self {
        Self {
            status: FilterState::new(),
            table: ListState::new(),
            generate: GenerateAction::new(default_kind, delay),
        }
    }

    pub fn rows<'a>(&self, data: &'a Dataset) -> Vec<&'a ReportRecord> {
        filter_records(&data.reports, self.status.current)
    }
}

impl ViewState for ReportingState {
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
