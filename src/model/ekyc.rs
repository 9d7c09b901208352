//! Identity verification (eKYC) cases.

use super::Variant;
use crate::error::SuiteError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Outcome of an identity verification case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerificationStatus {
    Verified,
    Pending,
    Rejected,
    FraudAlert,
}

impl Variant for VerificationStatus {
    const FIELD: &'static str = "verification status";
    const ALL: &'static [Self] = &[
        Self::Verified,
        Self::Pending,
        Self::Rejected,
        Self::FraudAlert,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Verified => "Verified",
            Self::Pending => "Pending",
            Self::Rejected => "Rejected",
            Self::FraudAlert => "Fraud Alert",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::Pending => "pending",
            Self::Rejected => "rejected",
            Self::FraudAlert => "fraud-alert",
        }
    }
}

impl std::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for VerificationStatus {
    type Err = SuiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

/// One onboarding applicant's document and biometric checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationCaseRecord {
    pub case_id: String,
    pub applicant_name: String,
    pub status: VerificationStatus,
    /// Selfie-to-document similarity, 0-100 with one decimal
    pub face_match_score: f64,
    /// Likelihood the document was altered, 0-100 with one decimal
    pub doc_tamper_score: f64,
    pub watch_list_hit: bool,
    pub timestamp: NaiveDateTime,
}

impl VerificationCaseRecord {
    /// Face match below this is shown as a failed biometric check.
    pub const FACE_MATCH_FLOOR: f64 = 80.0;

    /// Tamper score above this is shown as a suspected forgery.
    pub const TAMPER_CEILING: f64 = 50.0;

    #[must_use]
    pub fn face_match_failed(&self) -> bool {
        self.face_match_score < Self::FACE_MATCH_FLOOR
    }

    #[must_use]
    pub fn tamper_suspected(&self) -> bool {
        self.doc_tamper_score > Self::TAMPER_CEILING
    }
}

/// Headline figures for the eKYC view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EkycSummary {
    pub avg_onboarding_time: String,
    pub onboarding_target: String,
    pub total_verifications: String,
    /// Success rate as a percentage
    pub success_rate: f64,
    pub fraud_blocks: u32,
    /// OCR extraction accuracy as a percentage
    pub ocr_accuracy: f64,
}
