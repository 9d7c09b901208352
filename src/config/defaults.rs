//! Default values shared by the config types and the TUI.

/// Theme used when none is configured.
pub const DEFAULT_THEME: &str = "dark";

/// Interval between UI tick events.
pub const DEFAULT_TICK_RATE_MS: u64 = 250;

/// Accepted tick interval range.
pub const TICK_RATE_RANGE_MS: std::ops::RangeInclusive<u64> = 10..=1000;

/// Simulated report generation delay.
pub const DEFAULT_GENERATION_DELAY_MS: u64 = 2000;

/// Accepted generation delay range.
pub const GENERATION_DELAY_RANGE_MS: std::ops::RangeInclusive<u64> = 0..=60_000;
