//! View-model layer shared by the dashboard views.
//!
//! - [`FilterState`] - per-table filter selection with cycling
//! - [`StatusMessage`] - temporary status bar message with auto-clear
//!
//! Each view's local state embeds these instead of hand-rolling toggle
//! logic:
//!
//! ```ignore
//! use crate::tui::viewmodel::FilterState;
//!
//! pub struct AuditState {
//!     pub severity: FilterState<FilterChoice<Severity>>,
//!     // ...
//! }
//!
//! // Cycle: severity.next() or severity.prev()
//! ```

mod filter;
mod status;

pub use filter::{CycleFilter, FilterState};
pub use status::StatusMessage;
