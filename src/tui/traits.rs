//! Behaviour shared by every tab's local state.
//!
//! `SuiteApp` dispatches filter and navigation keys to the active tab
//! through [`ViewState`], so key handling stays the same across tabs while
//! each tab decides which fields it filters on.

use super::state::{ListNavigation, ListState};
use crate::model::Dataset;

/// Local UI state of one dashboard tab.
pub trait ViewState {
    /// Cycle the primary filter (`f` / `F`).
    fn cycle_filter(&mut self, forward: bool);

    /// Cycle the secondary filter (`s`). Tabs with a single filter ignore it.
    fn cycle_secondary_filter(&mut self) {}

    /// Number of rows passing the current filters.
    fn visible_rows(&self, data: &Dataset) -> usize;

    /// Active filters as `name = value` pairs, for the status bar.
    fn filter_summary(&self) -> Vec<(&'static str, String)>;

    fn table(&self) -> &ListState;

    fn table_mut(&mut self) -> &mut ListState;

    /// Re-clamp the selection after the visible row count changed.
    fn sync_rows(&mut self, data: &Dataset) {
        let rows = self.visible_rows(data);
        self.table_mut().sync_total(rows);
    }

    fn select_next(&mut self) {
        self.table_mut().select_next();
    }

    fn select_prev(&mut self) {
        self.table_mut().select_prev();
    }

    fn page_down(&mut self) {
        self.table_mut().page_down();
    }

    fn page_up(&mut self) {
        self.table_mut().page_up();
    }

    fn go_first(&mut self) {
        self.table_mut().go_first();
    }

    fn go_last(&mut self) {
        self.table_mut().go_last();
    }
}
