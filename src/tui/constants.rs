//! Named constants for TUI navigation and timing.

/// Number of rows to move per page-up/page-down action.
pub(crate) const PAGE_SIZE: usize = 10;

/// Slice the generation timer sleeps between cancellation checks.
pub(crate) const GENERATION_POLL_SLICE_MS: u64 = 25;

/// How long status bar messages stay visible.
pub(crate) const STATUS_AUTO_CLEAR_SECS: u64 = 5;
