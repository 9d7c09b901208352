//! **A terminal dashboard for compliance operations.**
//!
//! `compliance-suite` presents five review areas of a bank's compliance
//! function over a fixed, built-in dataset:
//!
//! - **AI audit log analysis**: anomaly KPIs, an NLP insight summary, a
//!   weekly anomaly trend and the anomaly log.
//! - **Regulatory reporting**: filing KPIs, the filings table and a
//!   simulated report generation control.
//! - **AML & sanctions screening**: risk scoring summary and name-match alerts.
//! - **Fraud detection**: transaction monitoring KPIs and fraud alerts.
//! - **eKYC onboarding**: verification KPIs and case analysis.
//!
//! ## Modules
//!
//! - **[`model`]**: record types, their closed status enumerations and the
//!   built-in [`Dataset`].
//! - **[`query`]**: order-preserving filters and the counts and
//!   percentages shown on KPI cards and charts.
//! - **[`tui`]**: the ratatui application, [`SuiteApp`], with one local
//!   state per view.
//! - **[`config`]**: YAML configuration, validation and saved preferences.
//! - **[`cli`]**: command handlers used by the binary.
//!
//! ## Filtering a table
//!
//! ```
//! use compliance_suite::model::{Dataset, Severity};
//! use compliance_suite::query::{filter_records, FilterChoice};
//!
//! let data = Dataset::builtin().unwrap();
//! let critical = filter_records(&data.anomalies, FilterChoice::Only(Severity::Critical));
//! assert_eq!(critical.len(), 1);
//! assert_eq!(critical[0].id, "A001");
//! ```
//!
//! ## Driving the app without a terminal
//!
//! ```
//! use compliance_suite::{model::ViewId, SuiteApp};
//!
//! let mut app = SuiteApp::with_builtin_data().unwrap();
//! app.select_view_by_name("fraud").unwrap();
//! assert_eq!(app.active_view(), ViewId::Fraud);
//! assert!(app.select_view_by_name("settings").is_err());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod tui;

pub use config::SuiteConfig;
pub use error::{Result, SuiteError};
pub use model::{Dataset, ViewId};
pub use query::{filter_records, FilterChoice};
pub use tui::SuiteApp;
