//! AML & sanctions screening tab state.

use crate::model::{Dataset, MatchStatus, RiskLevel, SanctionMatchRecord};
use crate::query::{filter_iter, FilterChoice};
use crate::tui::state::ListState;
use crate::tui::traits::ViewState;
use crate::tui::viewmodel::FilterState;

#[derive(Debug, Clone, Default)]
pub struct AmlState {
    pub risk: FilterState<FilterChoice<RiskLevel>>,
    pub status: FilterState<FilterChoice<MatchStatus>>,
    pub table: ListState,
}

impl AmlState {
    pub fn rows<'a>(&self, data: &'a Dataset) -> Vec<&'a SanctionMatchRecord> {
        let status = self.status.current;
        filter_iter(&data.sanction_matches, self.risk.current)
            .filter(|r| status.matches(r.status))
            .collect()
    }
}

impl ViewState for AmlState {
    fn cycle_filter(&mut self, forward: bool) {
        if forward {
            self.risk.next();
        } else {
            self.risk.prev();
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
            ("risk", self.risk.display_name().to_string()),
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
