//! CLI command handlers.
//!
//! Handlers are invoked by `main.rs` and return the process exit code, so
//! they can be exercised from tests without spawning the binary.

mod dashboard;
mod summary;

pub use dashboard::run_dashboard;
pub use summary::{build_summary, render_summary_table, run_summary, SummaryFormat, ViewSummary};

/// Process exit codes.
pub mod exit_codes {
    /// Command completed.
    pub const SUCCESS: i32 = 0;
    /// Invalid input: unknown view or filter, or an invalid config file.
    pub const USAGE: i32 = 1;
    /// Unexpected failure (terminal, I/O).
    pub const ERROR: i32 = 3;
}
