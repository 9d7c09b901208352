//! Transaction monitoring alerts.

use super::Variant;
use crate::error::SuiteError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertStatus {
    Flagged,
    Reviewed,
    Cleared,
}

impl Variant for AlertStatus {
    const FIELD: &'static str = "alert status";
    const ALL: &'static [Self] = &[Self::Flagged, Self::Reviewed, Self::Cleared];

    fn label(self) -> &'static str {
        match self {
            Self::Flagged => "Flagged",
            Self::Reviewed => "Reviewed",
            Self::Cleared => "Cleared",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::Flagged => "flagged",
            Self::Reviewed => "reviewed",
            Self::Cleared => "cleared",
        }
    }
}

impl std::fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for AlertStatus {
    type Err = SuiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionType {
    Transfer,
    LoanApp,
    MobileCharge,
    Withdrawal,
}

impl Variant for TransactionType {
    const FIELD: &'static str = "transaction type";
    const ALL: &'static [Self] = &[
        Self::Transfer,
        Self::LoanApp,
        Self::MobileCharge,
        Self::Withdrawal,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Transfer => "Transfer",
            Self::LoanApp => "Loan App",
            Self::MobileCharge => "Mobile Charge",
            Self::Withdrawal => "Withdrawal",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::Transfer => "transfer",
            Self::LoanApp => "loan-app",
            Self::MobileCharge => "mobile-charge",
            Self::Withdrawal => "withdrawal",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for TransactionType {
    type Err = SuiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

/// State of the adaptive model retraining loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdaptiveLearning {
    Active,
    Training,
    Paused,
}

impl std::fmt::Display for AdaptiveLearning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Training => write!(f, "Training"),
            Self::Paused => write!(f, "Paused"),
        }
    }
}

/// A transaction held or flagged by the fraud rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionAlertRecord {
    pub id: String,
    pub timestamp: NaiveDateTime,
    /// Amount in USD
    pub amount: f64,
    /// Masked account reference ("****1234")
    pub account: String,
    /// Fraud risk, 0-100
    pub fraud_score: u8,
    pub rule_trigger: String,
    pub status: AlertStatus,
    pub kind: TransactionType,
}

/// Headline figures for the fraud view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudSummary {
    pub total_transactions: String,
    pub flagged_alerts: u32,
    /// Fraud rate as a percentage (0.012 means 0.012%)
    pub fraud_rate: f64,
    pub model_latency: String,
    pub adaptive_learning: AdaptiveLearning,
}
