//! Sanctions/watch-list screening matches.

use super::Variant;
use crate::error::SuiteError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl Variant for RiskLevel {
    const FIELD: &'static str = "risk level";
    const ALL: &'static [Self] = &[Self::High, Self::Medium, Self::Low];

    fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = SuiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

/// Review state of a screening match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStatus {
    New,
    Review,
    Closed,
}

impl Variant for MatchStatus {
    const FIELD: &'static str = "match status";
    const ALL: &'static [Self] = &[Self::New, Self::Review, Self::Closed];

    fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Review => "Review",
            Self::Closed => "Closed",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Review => "review",
            Self::Closed => "closed",
        }
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for MatchStatus {
    type Err = SuiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

/// A customer name that matched a sanctions or PEP list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanctionMatchRecord {
    pub id: String,
    pub subject_name: String,
    /// Name-match confidence, 0-100
    pub match_score: u8,
    pub source_list: String,
    pub risk_level: RiskLevel,
    pub status: MatchStatus,
}

/// Headline figures for the AML view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskSummary {
    pub total_customers: String,
    pub high_risk_alerts: u32,
    pub sanction_matches: u32,
    /// Percentage of the customer base screened, 0-100
    pub screening_coverage: u8,
}
