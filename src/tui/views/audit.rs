//! AI audit log analysis view.

use super::{columns, filter_options, header_style, render_view_title, table_block};
use crate::model::{AnomalyStatus, Dataset, Severity, ViewId};
use crate::tui::app_states::AuditState;
use crate::tui::badges::badge;
use crate::tui::theme::{colors, Styles};
use crate::tui::widgets::{render_kpi_card, render_no_results_state, truncate_str, TrendBars};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
};

pub fn render_audit(frame: &mut Frame, area: Rect, data: &Dataset, state: &AuditState) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Length(8),
        Constraint::Min(6),
    ])
    .split(area);

    render_view_title(frame, chunks[0], ViewId::Audit);
    render_kpis(frame, chunks[1], data);

    let middle = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);
    render_insight(frame, middle[0], data);
    render_trend(frame, middle[1], data);

    render_anomaly_table(frame, chunks[3], data, state);
}

fn render_kpis(frame: &mut Frame, area: Rect, data: &Dataset) {
    let kpis = &data.audit_kpis;
    let scheme = colors();
    let cards = columns(area, 4);

    render_kpi_card(
        frame,
        cards[0],
        "Logs Processed (24h)",
        &kpis.logs_processed,
        scheme.text,
        Some("No data loss detected."),
    );
    render_kpi_card(
        frame,
        cards[1],
        "Processing Time",
        &kpis.processing_time,
        scheme.text,
        Some("99th percentile latency."),
    );
    let critical_color = if kpis.critical_anomalies > 0 {
        scheme.danger
    } else {
        scheme.success
    };
    render_kpi_card(
        frame,
        cards[2],
        "Critical Anomalies",
        &kpis.critical_anomalies.to_string(),
        critical_color,
        Some("Requires immediate attention."),
    );
    let backlog_color = if kpis.pending_remediation > 0 {
        scheme.warning
    } else {
        scheme.success
    };
    render_kpi_card(
        frame,
        cards[3],
        "Pending Remediation",
        &kpis.pending_remediation.to_string(),
        backlog_color,
        Some("Remediation backlog status."),
    );
}

fn render_insight(frame: &mut Frame, area: Rect, data: &Dataset) {
    let lines = vec![
        Line::styled(data.audit_kpis.nlp_summary.clone(), Styles::text()),
        Line::from(""),
        Line::styled("Last updated: 5 minutes ago", Styles::text_muted()),
    ];
    let block = Block::default()
        .title(Span::styled(" NLP Insight Summary ", Styles::section_title()))
        .borders(Borders::ALL)
        .border_style(Styles::border());
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_trend(frame: &mut Frame, area: Rect, data: &Dataset) {
    let block = Block::default()
        .title(Span::styled(" Weekly Anomaly Trend ", Styles::section_title()))
        .borders(Borders::ALL)
        .border_style(Styles::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let points: Vec<(String, u32)> = data
        .anomaly_trend
        .iter()
        .map(|p| (p.day.clone(), p.count))
        .collect();
    frame.render_widget(
        TrendBars::new(&points)
            .color(colors().view_accent(ViewId::Audit))
            .highlight_max(true),
        inner,
    );
}

fn render_anomaly_table(frame: &mut Frame, area: Rect, data: &Dataset, state: &AuditState) {
    let rows = state.rows(data);
    let block = table_block(
        "Recent Anomaly Logs",
        &[
            (
                "Severity",
                state.severity.display_name().to_string(),
                filter_options::<Severity>(),
            ),
            (
                "Status",
                state.status.display_name().to_string(),
                filter_options::<AnomalyStatus>(),
            ),
        ],
    );

    if rows.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        render_no_results_state(
            frame,
            inner,
            "severity/status",
            &format!(
                "{}/{}",
                state.severity.display_name(),
                state.status.display_name()
            ),
        );
        return;
    }

    let summary_width = (area.width as usize).saturating_sub(70).max(20);
    let table_rows: Vec<Row> = rows
        .iter()
        .map(|r| {
            Row::new(vec![
                Cell::from(Line::from(vec![
                    Span::styled(format!("{} ", r.id), Styles::text().bold()),
                    Span::styled(r.timestamp.format("%Y-%m-%d %H:%M").to_string(), Styles::text_muted()),
                ])),
                Cell::from(badge(r.severity)),
                Cell::from(truncate_str(&r.summary, summary_width)),
                Cell::from(Span::styled(r.system.clone(), Styles::text_muted())),
                Cell::from(Span::styled(r.reg_tags.join(", "), Style::default().fg(colors().info))),
                Cell::from(badge(r.status)),
            ])
        })
        .collect();

    let header = Row::new(["ID / Timestamp", "Severity", "Summary", "System", "Regulations", "Status"])
        .style(header_style());
    let table = Table::new(
        table_rows,
        [
            Constraint::Length(22),
            Constraint::Length(10),
            Constraint::Min(20),
            Constraint::Length(16),
            Constraint::Length(14),
            Constraint::Length(13),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(Styles::selected());

    let mut table_state = TableState::default().with_selected(state.table.as_table_selection());
    frame.render_stateful_widget(table, area, &mut table_state);
}
