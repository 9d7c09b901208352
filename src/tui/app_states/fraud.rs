//! Fraud monitoring tab state.

use crate::model::{AlertStatus, Dataset, TransactionAlertRecord, TransactionType};
use crate::query::{filter_iter, FilterChoice};
use crate::tui::state::ListState;
use crate::tui::traits::ViewState;
use crate::tui::viewmodel::FilterState;

#[derive(Debug, Clone, Default)]
pub struct FraudState {
    pub status: FilterState<FilterChoice<AlertStatus>>,
    pub kind: FilterState<FilterChoice<TransactionType>>,
    pub table: ListState,
}

impl FraudState {
    pub fn rows<'a>(&self, data: &'a Dataset) -> Vec<&'a TransactionAlertRecord> {
        let kind = self.kind.current;
        filter_iter(&data.transaction_alerts, self.status.current)
            .filter(|r| kind.matches(r.kind))
            .collect()
    }
}

impl ViewState for FraudState {
    fn cycle_filter(&mut self, forward: bool) {
        if forward {
            self.status.next();
        } else {
            self.status.prev();
        }
    }

    fn cycle_secondary_filter(&mut self) {
        self.kind.next();
    }

    fn visible_rows(&self, data: &Dataset) -> usize {
        self.rows(data).len()
    }

    fn filter_summary(&self) -> Vec<(&'static str, String)> {
        vec![
            ("status", self.status.display_name().to_string()),
            ("type", self.kind.display_name().to_string()),
        ]
    }

    fn table(&self) -> &ListState {
        &self.table
    }

    fn table_mut(&mut self) -> &mut ListState {
        &mut self.table
    }
}
