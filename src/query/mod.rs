//! Derived views over the static tables.
//!
//! - [`filter`]: order-preserving subsets selected by an enumerated field
//! - [`metrics`]: counts, percentages and chart scaling
//!
//! Everything here is a pure function of its inputs and is recomputed on
//! each call; the tables never change, so there is nothing to invalidate.

pub mod filter;
pub mod metrics;

pub use filter::{filter_iter, filter_records, FilterChoice, Filterable};
pub use metrics::{
    breakdown, count_by, count_matching, max_value, mean, percentage, scale, share_of,
    CategoryShare,
};
