//! Table selection state shared by the dashboard views.

use super::constants::PAGE_SIZE;

/// Trait for list-based navigation state.
///
/// Provides selection and paging for any view that displays a selectable
/// table of records.
pub trait ListNavigation {
    fn selected(&self) -> usize;

    fn set_selected(&mut self, idx: usize);

    /// Get the total number of rows.
    fn total(&self) -> usize;

    fn set_total(&mut self, total: usize);

    /// Move selection to the next row.
    fn select_next(&mut self) {
        let total = self.total();
        let selected = self.selected();
        if total > 0 && selected < total.saturating_sub(1) {
            self.set_selected(selected + 1);
        }
    }

    /// Move selection to the previous row.
    fn select_prev(&mut self) {
        let selected = self.selected();
        if selected > 0 {
            self.set_selected(selected - 1);
        }
    }

    /// Ensure selection is within valid bounds.
    fn clamp_selection(&mut self) {
        let total = self.total();
        let selected = self.selected();
        if total == 0 {
            self.set_selected(0);
        } else if selected >= total {
            self.set_selected(total.saturating_sub(1));
        }
    }

    fn page_up(&mut self) {
        let selected = self.selected();
        self.set_selected(selected.saturating_sub(PAGE_SIZE));
    }

    fn page_down(&mut self) {
        let total = self.total();
        let selected = self.selected();
        if total > 0 {
            self.set_selected((selected + PAGE_SIZE).min(total.saturating_sub(1)));
        }
    }

    fn go_first(&mut self) {
        self.set_selected(0);
    }

    fn go_last(&mut self) {
        let total = self.total();
        if total > 0 {
            self.set_selected(total.saturating_sub(1));
        }
    }
}

/// Selection over a table whose visible row count depends on the active
/// filter.
#[derive(Debug, Clone, Default)]
pub struct ListState {
    pub selected: usize,
    pub total: usize,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_total(total: usize) -> Self {
        Self { selected: 0, total }
    }

    /// Record the current visible row count and clamp the selection to it.
    pub fn sync_total(&mut self, total: usize) {
        self.total = total;
        self.clamp_selection();
    }

    /// Selection as expected by `ratatui::widgets::TableState`.
    pub fn as_table_selection(&self) -> Option<usize> {
        (self.total > 0).then_some(self.selected)
    }
}

impl ListNavigation for ListState {
    fn selected(&self) -> usize {
        self.selected
    }

    fn set_selected(&mut self, idx: usize) {
        self.selected = idx;
    }

    fn total(&self) -> usize {
        self.total
    }

    fn set_total(&mut self, total: usize) {
        self.total = total;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_state_navigation() {
        let mut state = ListState::with_total(5);

        state.select_next();
        assert_eq!(state.selected(), 1);

        state.select_prev();
        state.select_prev();
        assert_eq!(state.selected(), 0);

        state.go_last();
        assert_eq!(state.selected(), 4);

        state.select_next();
        assert_eq!(state.selected(), 4);

        state.go_first();
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn test_list_state_page_navigation() {
        let mut state = ListState::with_total(25);

        state.page_down();
        assert_eq!(state.selected(), 10);

        state.page_down();
        state.page_down();
        assert_eq!(state.selected(), 24);

        state.page_up();
        assert_eq!(state.selected(), 14);
    }

    #[test]
    fn test_sync_total_clamps_after_filter_narrows() {
        let mut state = ListState::with_total(5);
        state.go_last();

        state.sync_total(2);
        assert_eq!(state.selected(), 1);

        state.sync_total(0);
        assert_eq!(state.selected(), 0);
        assert_eq!(state.as_table_selection(), None);
    }
}
