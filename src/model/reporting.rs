//! Regulatory filings and the report kinds that can be generated.

use super::Variant;
use crate::error::SuiteError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle of a regulatory filing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportStatus {
    Generated,
    InProgress,
    Pending,
}

impl Variant for ReportStatus {
    const FIELD: &'static str = "report status";
    const ALL: &'static [Self] = &[Self::Generated, Self::InProgress, Self::Pending];

    fn label(self) -> &'static str {
        match self {
            Self::Generated => "Generated",
            Self::InProgress => "In Progress",
            Self::Pending => "Pending",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::Generated => "generated",
            Self::InProgress => "in-progress",
            Self::Pending => "pending",
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ReportStatus {
    type Err = SuiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

/// How often a filing is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportCadence {
    Daily,
    Monthly,
    Quarterly,
}

impl Variant for ReportCadence {
    const FIELD: &'static str = "report cadence";
    const ALL: &'static [Self] = &[Self::Daily, Self::Monthly, Self::Quarterly];

    fn label(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Monthly => "Monthly",
            Self::Quarterly => "Quarterly",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
        }
    }
}

impl std::fmt::Display for ReportCadence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ReportCadence {
    type Err = SuiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

/// Report types offered by the "Generate Report" control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportKind {
    #[serde(rename = "lcr")]
    Lcr,
    #[serde(rename = "nsfr")]
    Nsfr,
    #[serde(rename = "sar")]
    Sar,
    #[serde(rename = "ctr")]
    Ctr,
    #[serde(rename = "finra-4530")]
    Finra4530,
}

impl ReportKind {
    /// Full regulatory title of the report.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Lcr => "Liquidity Coverage Ratio (LCR)",
            Self::Nsfr => "Net Stable Funding Ratio (NSFR)",
            Self::Sar => "Suspicious Activity Report (SAR)",
            Self::Ctr => "Currency Transaction Report (CTR)",
            Self::Finra4530 => "FINRA Rule 4530 Report",
        }
    }
}

impl Variant for ReportKind {
    const FIELD: &'static str = "report type";
    const ALL: &'static [Self] = &[Self::Lcr, Self::Nsfr, Self::Sar, Self::Ctr, Self::Finra4530];

    fn label(self) -> &'static str {
        match self {
            Self::Lcr => "LCR",
            Self::Nsfr => "NSFR",
            Self::Sar => "SAR",
            Self::Ctr => "CTR",
            Self::Finra4530 => "FINRA 4530",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::Lcr => "lcr",
            Self::Nsfr => "nsfr",
            Self::Sar => "sar",
            Self::Ctr => "ctr",
            Self::Finra4530 => "finra-4530",
        }
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ReportKind {
    type Err = SuiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

/// A pending or recent regulatory filing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub id: String,
    pub name: String,
    pub cadence: ReportCadence,
    pub period: String,
    pub status: ReportStatus,
    pub generated_on: NaiveDate,
    /// Human-readable artifact size ("5.2 MB")
    pub size: String,
    pub due_on: NaiveDate,
}

/// Headline figures for the reporting view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportingKpis {
    pub jurisdiction: String,
    pub jurisdictions_covered: u32,
    pub upcoming_due: u32,
    pub reports_generated: u32,
    pub time_saved: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_kind_parses_keys() {
        assert_eq!("lcr".parse::<ReportKind>().ok(), Some(ReportKind::Lcr));
        assert_eq!("FINRA-4530".parse::<ReportKind>().ok(), Some(ReportKind::Finra4530));
        assert_eq!("finra 4530".parse::<ReportKind>().ok(), Some(ReportKind::Finra4530));
        assert!("".parse::<ReportKind>().is_err());
    }

    #[test]
    fn test_report_kind_serializes_as_key() {
        let json = serde_json::to_string(&ReportKind::Finra4530).unwrap();
        assert_eq!(json, "\"finra-4530\"");
    }
}
