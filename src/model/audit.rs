//! Audit log anomalies and the audit KPI summary.

use super::Variant;
use crate::error::SuiteError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Urgency level of an audit anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Critical,
    High,
    Low,
}

impl Variant for Severity {
    const FIELD: &'static str = "severity";
    const ALL: &'static [Self] = &[Self::Critical, Self::High, Self::Low];

    fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Low => "Low",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Severity {
    type Err = SuiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

/// Remediation state of an anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnomalyStatus {
    Open,
    InProgress,
    Closed,
}

impl Variant for AnomalyStatus {
    const FIELD: &'static str = "status";
    const ALL: &'static [Self] = &[Self::Open, Self::InProgress, Self::Closed];

    fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Closed => "Closed",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in-progress",
            Self::Closed => "closed",
        }
    }
}

impl std::fmt::Display for AnomalyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for AnomalyStatus {
    type Err = SuiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

/// One anomaly flagged by the audit log analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyRecord {
    pub id: String,
    pub timestamp: NaiveDateTime,
    pub severity: Severity,
    pub summary: String,
    /// Originating user or system
    pub system: String,
    /// Regulatory frameworks the anomaly touches (GDPR, SOX, ...)
    pub reg_tags: Vec<String>,
    pub status: AnomalyStatus,
}

/// One day of the weekly anomaly trend chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub day: String,
    pub count: u32,
}

/// Headline figures for the audit view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditKpis {
    pub logs_processed: String,
    pub processing_time: String,
    pub critical_anomalies: u32,
    pub pending_remediation: u32,
    /// Narrative insight shown under the KPI cards
    pub nlp_summary: String,
}
