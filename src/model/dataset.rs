//! The built-in mock dataset rendered by every view.

use super::{
    AdaptiveLearning, AlertStatus, AnomalyRecord, AnomalyStatus, AuditKpis, EkycSummary,
    FraudSummary, MatchStatus, ReportCadence, ReportRecord, ReportStatus, ReportingKpis, RiskLevel,
    RiskSummary, SanctionMatchRecord, Severity, TransactionAlertRecord, TransactionType,
    TrendPoint, VerificationCaseRecord, VerificationStatus,
};
use crate::error::{Result, SuiteError};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::collections::HashSet;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// All tables and KPI summaries, owned by the top-level app and lent to views.
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    pub audit_kpis: AuditKpis,
    pub anomaly_trend: Vec<TrendPoint>,
    pub anomalies: Vec<AnomalyRecord>,
    pub reporting_kpis: ReportingKpis,
    pub reports: Vec<ReportRecord>,
    pub risk_summary: RiskSummary,
    pub sanction_matches: Vec<SanctionMatchRecord>,
    pub fraud_summary: FraudSummary,
    pub transaction_alerts: Vec<TransactionAlertRecord>,
    pub ekyc_summary: EkycSummary,
    pub verification_cases: Vec<VerificationCaseRecord>,
}

impl Dataset {
    /// Build the shipped mock dataset and check its invariants.
    pub fn builtin() -> Result<Self> {
        let dataset = Self {
            audit_kpis: AuditKpis {
                logs_processed: "1,250,000+".to_string(),
                processing_time: "4.7s".to_string(),
                critical_anomalies: 2,
                pending_remediation: 0,
                nlp_summary: "The AI model has observed that system activity was heavily focused \
                    on loan application services during business hours (10 AM - 3 PM) over the \
                    last 7 days. Critical anomalies remain low, but high-severity alerts related \
                    to unauthorized access attempts spiked on Thursday. Remediation backlog is \
                    clear, indicating prompt action by the security team."
                    .to_string(),
            },
            anomaly_trend: [
                ("Mon", 12),
                ("Tue", 18),
                ("Wed", 25),
                ("Thu", 35),
                ("Fri", 15),
                ("Sat", 8),
                ("Sun", 5),
            ]
            .into_iter()
            .map(|(day, count)| TrendPoint {
                day: day.to_string(),
                count,
            })
            .collect(),
            anomalies: vec![
                anomaly(
                    "A001",
                    "2025-10-06 14:30",
                    Severity::Critical,
                    "Unauthorized attempt to modify database schema.",
                    "Internal API",
                    &["GDPR", "PCI-DSS"],
                    AnomalyStatus::Open,
                )?,
                anomaly(
                    "A002",
                    "2025-10-06 10:15",
                    Severity::High,
                    "Large file transfer detected outside normal hours.",
                    "Remote Access",
                    &["NIST", "SOX"],
                    AnomalyStatus::InProgress,
                )?,
                anomaly(
                    "A003",
                    "2025-10-05 08:00",
                    Severity::Low,
                    "Configuration drift detected on firewall rule set.",
                    "Network Monitor",
                    &["HIPAA"],
                    AnomalyStatus::Closed,
                )?,
            ],
            reporting_kpis: ReportingKpis {
                jurisdiction: "Global".to_string(),
                jurisdictions_covered: 45,
                upcoming_due: 3,
                reports_generated: 12,
                time_saved: "250 hrs".to_string(),
            },
            reports: vec![
                report(
                    "R01",
                    "FINRA Rule 4530 Report",
                    ReportCadence::Daily,
                    "Q3 2025",
                    ReportStatus::Generated,
                    "2025-09-30",
                    "5.2 MB",
                    "2025-10-15",
                )?,
                report(
                    "R02",
                    "AML SAR Filing (Batch 3)",
                    ReportCadence::Monthly,
                    "Aug 2025",
                    ReportStatus::Pending,
                    "2025-10-01",
                    "1.1 GB",
                    "2025-10-31",
                )?,
                report(
                    "R03",
                    "OCC 15 CFR Part 900",
                    ReportCadence::Quarterly,
                    "Q3 2025",
                    ReportStatus::InProgress,
                    "2025-10-05",
                    "1.5 MB",
                    "2025-11-10",
                )?,
            ],
            risk_summary: RiskSummary {
                total_customers: "450,120".to_string(),
                high_risk_alerts: 15,
                sanction_matches: 3,
                screening_coverage: 98,
            },
            sanction_matches: vec![
                sanction("M101", "Alexei V. Kirov", 92, "OFAC SDN", RiskLevel::High, MatchStatus::New),
                sanction("M102", "Zoe P. Chen", 78, "EU Consolidated", RiskLevel::Medium, MatchStatus::Review),
                sanction("M103", "David H. Smith", 61, "PEPS List", RiskLevel::Low, MatchStatus::Closed),
                sanction("M104", "Maria R. Sanchez", 88, "UN Security Council", RiskLevel::High, MatchStatus::New),
                sanction("M105", "Tariq A. Al-Jazi", 85, "OFAC SSI", RiskLevel::Medium, MatchStatus::New),
            ],
            fraud_summary: FraudSummary {
                total_transactions: "3,200,000".to_string(),
                flagged_alerts: 45,
                fraud_rate: 0.012,
                model_latency: "25ms".to_string(),
                adaptive_learning: AdaptiveLearning::Active,
            },
            transaction_alerts: vec![
                alert("T901", "2025-10-07 11:45", 50_000.00, "****1234", 98, "Large International Transfer", AlertStatus::Flagged, TransactionType::Transfer)?,
                alert("T902", "2025-10-07 10:30", 1_500.00, "****5678", 75, "Duplicate Mobile Charge Pattern", AlertStatus::Flagged, TransactionType::MobileCharge)?,
                alert("T903", "2025-10-07 09:10", 250_000.00, "****9012", 62, "New Geo-Location Access", AlertStatus::Reviewed, TransactionType::Withdrawal)?,
                alert("T904", "2025-10-06 17:05", 0.00, "****3456", 95, "Incomplete Loan Application Data", AlertStatus::Flagged, TransactionType::LoanApp)?,
                alert("T905", "2025-10-06 14:00", 50.00, "****7890", 10, "Low-Value Pattern Deviation", AlertStatus::Cleared, TransactionType::MobileCharge)?,
            ],
            ekyc_summary: EkycSummary {
                avg_onboarding_time: "28s".to_string(),
                onboarding_target: "30s".to_string(),
                total_verifications: "8,912".to_string(),
                success_rate: 95.8,
                fraud_blocks: 21,
                ocr_accuracy: 99.7,
            },
            verification_cases: vec![
                case("K701", "Jane M. Doe", VerificationStatus::Verified, 98.2, 2.1, false, "2025-10-07 15:01")?,
                case("K702", "John A. Smith", VerificationStatus::FraudAlert, 65.5, 89.0, true, "2025-10-07 14:55")?,
                case("K703", "Chen L. Wei", VerificationStatus::Pending, 88.0, 10.5, false, "2025-10-07 14:48")?,
                case("K704", "Robert P. Jones", VerificationStatus::Verified, 95.1, 1.5, false, "2025-10-07 14:30")?,
                case("K705", "Maria T. Garcia", VerificationStatus::Rejected, 92.0, 5.0, true, "2025-10-07 14:05")?,
            ],
        };

        dataset.validate()?;
        Ok(dataset)
    }

    /// Check identifier uniqueness and score ranges across every table.
    pub fn validate(&self) -> Result<()> {
        ensure_unique("anomaly", self.anomalies.iter().map(|r| r.id.as_str()))?;
        ensure_unique("report", self.reports.iter().map(|r| r.id.as_str()))?;
        ensure_unique("sanction match", self.sanction_matches.iter().map(|r| r.id.as_str()))?;
        ensure_unique("transaction alert", self.transaction_alerts.iter().map(|r| r.id.as_str()))?;
        ensure_unique("verification case", self.verification_cases.iter().map(|r| r.case_id.as_str()))?;

        for m in &self.sanction_matches {
            ensure_percent(&m.id, "match score", f64::from(m.match_score))?;
        }
        for a in &self.transaction_alerts {
            ensure_percent(&a.id, "fraud score", f64::from(a.fraud_score))?;
            if !a.amount.is_finite() || a.amount < 0.0 {
                return Err(SuiteError::validation(format!(
                    "transaction alert {}: amount {} must be a non-negative number",
                    a.id, a.amount
                )));
            }
        }
        for c in &self.verification_cases {
            ensure_percent(&c.case_id, "face match score", c.face_match_score)?;
            ensure_percent(&c.case_id, "document tamper score", c.doc_tamper_score)?;
        }
        ensure_percent("risk summary", "screening coverage", f64::from(self.risk_summary.screening_coverage))?;
        ensure_percent("eKYC summary", "success rate", self.ekyc_summary.success_rate)?;
        ensure_percent("eKYC summary", "OCR accuracy", self.ekyc_summary.ocr_accuracy)?;

        Ok(())
    }

    /// Total number of records across the five tables.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.anomalies.len()
            + self.reports.len()
            + self.sanction_matches.len()
            + self.transaction_alerts.len()
            + self.verification_cases.len()
    }
}

fn ensure_unique<'a>(table: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SuiteError::validation(format!("duplicate {table} id '{id}'")));
        }
    }
    Ok(())
}

fn ensure_percent(owner: &str, field: &str, value: f64) -> Result<()> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(SuiteError::validation(format!(
            "{owner}: {field} {value} outside 0-100"
        )))
    }
}

fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map_err(|e| SuiteError::validation(format!("bad timestamp '{value}': {e}")))
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| SuiteError::validation(format!("bad date '{value}': {e}")))
}

fn anomaly(
    id: &str,
    timestamp: &str,
    severity: Severity,
    summary: &str,
    system: &str,
    reg_tags: &[&str],
    status: AnomalyStatus,
) -> Result<AnomalyRecord> {
    Ok(AnomalyRecord {
        id: id.to_string(),
        timestamp: parse_timestamp(timestamp)?,
        severity,
        summary: summary.to_string(),
        system: system.to_string(),
        reg_tags: reg_tags.iter().map(|t| (*t).to_string()).collect(),
        status,
    })
}

#[allow(clippy::too_many_arguments)]
fn report(
    id: &str,
    name: &str,
    cadence: ReportCadence,
    period: &str,
    status: ReportStatus,
    generated_on: &str,
    size: &str,
    due_on: &str,
) -> Result<ReportRecord> {
    Ok(ReportRecord {
        id: id.to_string(),
        name: name.to_string(),
        cadence,
        period: period.to_string(),
        status,
        generated_on: parse_date(generated_on)?,
        size: size.to_string(),
        due_on: parse_date(due_on)?,
    })
}

fn sanction(
    id: &str,
    subject_name: &str,
    match_score: u8,
    source_list: &str,
    risk_level: RiskLevel,
    status: MatchStatus,
) -> SanctionMatchRecord {
    SanctionMatchRecord {
        id: id.to_string(),
        subject_name: subject_name.to_string(),
        match_score,
        source_list: source_list.to_string(),
        risk_level,
        status,
    }
}

#[allow(clippy::too_many_arguments)]
fn alert(
    id: &str,
    timestamp: &str,
    amount: f64,
    account: &str,
    fraud_score: u8,
    rule_trigger: &str,
    status: AlertStatus,
    kind: TransactionType,
) -> Result<TransactionAlertRecord> {
    Ok(TransactionAlertRecord {
        id: id.to_string(),
        timestamp: parse_timestamp(timestamp)?,
        amount,
        account: account.to_string(),
        fraud_score,
        rule_trigger: rule_trigger.to_string(),
        status,
        kind,
    })
}

fn case(
    case_id: &str,
    applicant_name: &str,
    status: VerificationStatus,
    face_match_score: f64,
    doc_tamper_score: f64,
    watch_list_hit: bool,
    timestamp: &str,
) -> Result<VerificationCaseRecord> {
    Ok(VerificationCaseRecord {
        case_id: case_id.to_string(),
        applicant_name: applicant_name.to_string(),
        status,
        face_match_score,
        doc_tamper_score,
        watch_list_hit,
        timestamp: parse_timestamp(timestamp)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_dataset_is_valid() {
        let data = Dataset::builtin().expect("builtin dataset");
        assert_eq!(data.anomalies.len(), 3);
        assert_eq!(data.reports.len(), 3);
        assert_eq!(data.sanction_matches.len(), 5);
        assert_eq!(data.transaction_alerts.len(), 5);
        assert_eq!(data.verification_cases.len(), 5);
        assert_eq!(data.anomaly_trend.len(), 7);
        assert_eq!(data.record_count(), 21);
    }

    #[test]
    fn test_audit_table_order() {
        let data = Dataset::builtin().expect("builtin dataset");
        let ids: Vec<&str> = data.anomalies.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["A001", "A002", "A003"]);
        assert_eq!(data.anomalies[0].severity, Severity::Critical);
        assert_eq!(data.anomalies[0].timestamp.format(TIMESTAMP_FORMAT).to_string(), "2025-10-06 14:30");
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut data = Dataset::builtin().expect("builtin dataset");
        data.reports[2].id = "R01".to_string();
        let err = data.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate report id 'R01'"));
    }

    #[test]
    fn test_validate_rejects_out_of_range_scores() {
        let mut data = Dataset::builtin().expect("builtin dataset");
        data.verification_cases[0].face_match_score = 100.5;
        assert!(data.validate().is_err());

        let mut data = Dataset::builtin().expect("builtin dataset");
        data.sanction_matches[1].match_score = 101;
        assert!(data.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_amount() {
        let mut data = Dataset::builtin().expect("builtin dataset");
        data.transaction_alerts[0].amount = -1.0;
        assert!(data.validate().is_err());
    }
}
