//! Filter state management for TUI views.
//!
//! Provides generic filter cycling that works with any enum-based filter,
//! so views don't duplicate toggle logic.

use crate::model::Variant;
use crate::query::FilterChoice;

/// Trait for filter types that can cycle through options.
///
/// Every [`FilterChoice`] over a [`Variant`] field implements it, cycling
/// `All` → each variant in display order → `All`.
pub trait CycleFilter: Clone + Copy + Default {
    /// Get the next filter in the cycle.
    #[must_use]
    fn next(&self) -> Self;

    /// Get the previous filter in the cycle.
    #[must_use]
    fn prev(&self) -> Self;

    /// Get a display name for the filter.
    fn display_name(&self) -> &str;
}

impl<K: Variant> CycleFilter for FilterChoice<K> {
    fn next(&self) -> Self {
        match self {
            Self::All => K::ALL.first().map_or(Self::All, |k| Self::Only(*k)),
            Self::Only(current) => position(*current)
                .and_then(|i| K::ALL.get(i + 1))
                .map_or(Self::All, |k| Self::Only(*k)),
        }
    }

    fn prev(&self) -> Self {
        match self {
            Self::All => K::ALL.last().map_or(Self::All, |k| Self::Only(*k)),
            Self::Only(current) => match position(*current) {
                Some(i) if i > 0 => Self::Only(K::ALL[i - 1]),
                _ => Self::All,
            },
        }
    }

    fn display_name(&self) -> &str {
        self.label()
    }
}

fn position<K: Variant>(key: K) -> Option<usize> {
    K::ALL.iter().position(|k| *k == key)
}

/// Generic filter state that works with any [`CycleFilter`].
#[derive(Debug, Clone)]
pub struct FilterState<F: CycleFilter> {
    /// Current filter value
    pub current: F,
}

impl<F: CycleFilter> Default for FilterState<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: CycleFilter> FilterState<F> {
    /// Create a new filter state with the default filter.
    pub fn new() -> Self {
        Self {
            current: F::default(),
        }
    }

    /// Create a filter state with a specific initial value.
    pub fn with_filter(filter: F) -> Self {
        Self { current: filter }
    }

    /// Cycle to the next filter.
    pub fn next(&mut self) {
        self.current = self.current.next();
    }

    /// Cycle to the previous filter.
    pub fn prev(&mut self) {
        self.current = self.current.prev();
    }

    /// Set a specific filter.
    pub fn set(&mut self, filter: F) {
        self.current = filter;
    }

    /// Reset to the default filter.
    pub fn reset(&mut self) {
        self.current = F::default();
    }

    /// Get the current filter's display name.
    pub fn display_name(&self) -> &str {
        self.current.display_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Severity, VerificationStatus};

    #[test]
    fn test_filter_state_cycling() {
        let mut state = FilterState::<FilterChoice<Severity>>::new();

        assert_eq!(state.current, FilterChoice::All);
        assert_eq!(state.display_name(), "All");

        state.next();
        assert_eq!(state.current, FilterChoice::Only(Severity::Critical));
        assert_eq!(state.display_name(), "Critical");

        state.next();
        state.next();
        assert_eq!(state.current, FilterChoice::Only(Severity::Low));

        state.next();
        assert_eq!(state.current, FilterChoice::All);

        state.prev();
        assert_eq!(state.current, FilterChoice::Only(Severity::Low));
    }

    #[test]
    fn test_full_cycle_visits_every_option() {
        let mut state = FilterState::<FilterChoice<VerificationStatus>>::new();
        let mut seen = vec![state.current];
        for _ in 0..VerificationStatus::ALL.len() {
            state.next();
            seen.push(state.current);
        }
        assert_eq!(seen, FilterChoice::<VerificationStatus>::options());
        state.next();
        assert_eq!(state.current, FilterChoice::All);
    }

    #[test]
    fn test_filter_state_set_reset() {
        let mut state = FilterState::with_filter(FilterChoice::Only(Severity::High));
        assert_eq!(state.display_name(), "High");

        state.set(FilterChoice::Only(Severity::Low));
        assert_eq!(state.current, FilterChoice::Only(Severity::Low));

        state.reset();
        assert_eq!(state.current, FilterChoice::All);
    }
}
