//! Summary command handler.
//!
//! Prints one view's table, optionally filtered on the view's primary
//! field, as an aligned text table or as JSON.

use super::exit_codes;
use crate::error::Result;
use crate::model::{
    AlertStatus, AnomalyRecord, Dataset, ReportRecord, ReportStatus, RiskLevel,
    SanctionMatchRecord, Severity, TransactionAlertRecord, Variant, VerificationCaseRecord,
    VerificationStatus, ViewId,
};
use crate::query::{filter_records, FilterChoice, Filterable};
use clap::ValueEnum;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// Output format of the `summary` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    #[default]
    Table,
    Json,
}

/// A record that can be printed as a summary row.
trait SummaryRow: Serialize {
    const COLUMNS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

impl SummaryRow for AnomalyRecord {
    const COLUMNS: &'static [&'static str] =
        &["ID", "TIMESTAMP", "SEVERITY", "SYSTEM", "STATUS", "SUMMARY"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.timestamp.format("%Y-%m-%d %H:%M").to_string(),
            self.severity.label().to_string(),
            self.system.clone(),
            self.status.label().to_string(),
            self.summary.clone(),
        ]
    }
}

impl SummaryRow for ReportRecord {
    const COLUMNS: &'static [&'static str] = &["ID", "NAME", "PERIOD", "DUE", "STATUS"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            format!("{} ({})", self.period, self.cadence.label()),
            self.due_on.format("%Y-%m-%d").to_string(),
            self.status.label().to_string(),
        ]
    }
}

impl SummaryRow for SanctionMatchRecord {
    const COLUMNS: &'static [&'static str] = &["ID", "NAME", "SCORE", "LIST", "RISK", "STATUS"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.subject_name.clone(),
            format!("{}%", self.match_score),
            self.source_list.clone(),
            self.risk_level.label().to_string(),
            self.status.label().to_string(),
        ]
    }
}

impl SummaryRow for TransactionAlertRecord {
    const COLUMNS: &'static [&'static str] =
        &["ID", "ACCOUNT", "AMOUNT", "TYPE", "SCORE", "STATUS", "RULE"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.account.clone(),
            format!("{:.2}", self.amount),
            self.kind.label().to_string(),
            self.fraud_score.to_string(),
            self.status.label().to_string(),
            self.rule_trigger.clone(),
        ]
    }
}

impl SummaryRow for VerificationCaseRecord {
    const COLUMNS: &'static [&'static str] =
        &["CASE", "APPLICANT", "FACE", "TAMPER", "WATCHLIST", "STATUS"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.case_id.clone(),
            self.applicant_name.clone(),
            format!("{:.1}%", self.face_match_score),
            format!("{:.1}%", self.doc_tamper_score),
            if self.watch_list_hit { "HIT" } else { "CLEARED" }.to_string(),
            self.status.label().to_string(),
        ]
    }
}

/// A filtered view table, ready to print.
#[derive(Debug, Clone, Serialize)]
pub struct ViewSummary {
    pub view: ViewId,
    /// Field the filter applies to
    pub filter_field: &'static str,
    /// Filter key, `all` when unfiltered
    pub filter: &'static str,
    pub count: usize,
    #[serde(skip)]
    pub columns: &'static [&'static str],
    #[serde(skip)]
    pub rows: Vec<Vec<String>>,
    pub records: Vec<serde_json::Value>,
}

fn summarize<R, K>(view: ViewId, table: &[R], filter: Option<&str>) -> Result<ViewSummary>
where
    R: Filterable<K> + SummaryRow,
    K: Variant,
{
    let choice = filter
        .map(FilterChoice::<K>::parse)
        .transpose()?
        .unwrap_or_default();
    let selected = filter_records(table, choice);
    let records = selected
        .iter()
        .map(serde_json::to_value)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(ViewSummary {
        view,
        filter_field: K::FIELD,
        filter: choice.key(),
        count: selected.len(),
        columns: R::COLUMNS,
        rows: selected.iter().map(|r| r.cells()).collect(),
        records,
    })
}

/// Filter `view`'s table on its primary field.
///
/// `filter` is `all` or a value of that field (audit: severity, reporting:
/// status, aml: risk level, fraud: alert status, ekyc: verification
/// status). A value no record carries yields an empty summary.
pub fn build_summary(data: &Dataset, view: ViewId, filter: Option<&str>) -> Result<ViewSummary> {
    match view {
        ViewId::Audit => summarize::<_, Severity>(view, &data.anomalies, filter),
        ViewId::Reporting => summarize::<_, ReportStatus>(view, &data.reports, filter),
        ViewId::Aml => summarize::<_, RiskLevel>(view, &data.sanction_matches, filter),
        ViewId::Fraud => summarize::<_, AlertStatus>(view, &data.transaction_alerts, filter),
        ViewId::Ekyc => {
            summarize::<_, VerificationStatus>(view, &data.verification_cases, filter)
        }
    }
}

/// Render a summary as a left-aligned text table.
pub fn render_summary_table(summary: &ViewSummary) -> String {
    let mut widths: Vec<usize> = summary.columns.iter().map(|c| c.width()).collect();
    for row in &summary.rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    out.push_str(&pad_row(summary.columns.iter().copied(), &widths));
    out.push('\n');
    for row in &summary.rows {
        out.push_str(&pad_row(row.iter().map(String::as_str), &widths));
        out.push('\n');
    }
    out.push_str(&format!(
        "\n{} {} record(s), {} = {}\n",
        summary.count, summary.view, summary.filter_field, summary.filter
    ));
    out
}

fn pad_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| format!("{cell}{}", " ".repeat(width.saturating_sub(cell.width()))))
        .collect();
    padded.join("  ").trim_end().to_string()
}

/// Run the summary command, printing to stdout.
pub fn run_summary(view: ViewId, filter: Option<&str>, format: SummaryFormat) -> anyhow::Result<i32> {
    let data = Dataset::builtin()?;
    let summary = match build_summary(&data, view, filter) {
        Ok(summary) => summary,
        Err(e) if e.is_user_error() => {
            eprintln!("error: {e}");
            return Ok(exit_codes::USAGE);
        }
        Err(e) => return Err(e.into()),
    };
    tracing::debug!(view = %view, filter = summary.filter, count = summary.count, "summary built");

    match format {
        SummaryFormat::Table => print!("{}", render_summary_table(&summary)),
        SummaryFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }
    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SuiteError;

    fn data() -> Dataset {
        Dataset::builtin().unwrap()
    }

    #[test]
    fn test_unfiltered_summary_keeps_order() {
        let summary = build_summary(&data(), ViewId::Audit, None).unwrap();
        assert_eq!(summary.filter, "all");
        let ids: Vec<&str> = summary.rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(ids, ["A001", "A002", "A003"]);
    }

    #[test]
    fn test_filtered_summary() {
        let summary = build_summary(&data(), ViewId::Audit, Some("critical")).unwrap();
        assert_eq!(summary.count, 1);
        assert_eq!(summary.rows[0][0], "A001");
        assert_eq!(summary.records[0]["id"], "A001");
    }

    #[test]
    fn test_invalid_filter_is_user_error() {
        let err = build_summary(&data(), ViewId::Fraud, Some("medium")).unwrap_err();
        assert!(matches!(err, SuiteError::InvalidFilter { field: "alert status", .. }));
        assert!(err.is_user_error());
    }

    #[test]
    fn test_table_rendering_aligns_columns() {
        let summary = build_summary(&data(), ViewId::Aml, Some("high")).unwrap();
        let table = render_summary_table(&summary);
        let mut lines = table.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("ID"));
        assert!(header.contains("SCORE"));
        assert!(table.contains("2 aml record(s), risk level = high"));
    }

    #[test]
    fn test_json_has_records() {
        let summary = build_summary(&data(), ViewId::Ekyc, None).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["view"], "ekyc");
        assert_eq!(json["count"], summary.count);
        assert!(json.get("rows").is_none());
    }
}
