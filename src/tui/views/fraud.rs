//! Real-time fraud detection view.

use super::{columns, filter_options, header_style, render_breakdown, render_view_title, table_block};
use crate::model::{AlertStatus, Dataset, TransactionType, Variant, ViewId};
use crate::query::mean;
use crate::tui::app_states::FraudState;
use crate::tui::badges::{badge, score_tone, toned_text, Toned};
use crate::tui::theme::{colors, Styles};
use crate::tui::widgets::{format_usd, render_kpi_card, render_no_results_state, truncate_str};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

pub fn render_fraud(frame: &mut Frame, area: Rect, data: &Dataset, state: &FraudState) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Min(8),
    ])
    .split(area);

    render_view_title(frame, chunks[0], ViewId::Fraud);
    render_kpis(frame, chunks[1], data);

    let body = Layout::horizontal([Constraint::Min(60), Constraint::Length(30)]).split(chunks[2]);
    render_alert_table(frame, body[0], data, state);
    render_status_panel(frame, body[1], data);
}

fn render_kpis(frame: &mut Frame, area: Rect, data: &Dataset) {
    let summary = &data.fraud_summary;
    let scheme = colors();
    let cards = columns(area, 4);

    render_kpi_card(
        frame,
        cards[0],
        "Transactions Monitored",
        &summary.total_transactions,
        scheme.text,
        Some(&format!("Fraud rate: {}%", summary.fraud_rate)),
    );
    render_kpi_card(
        frame,
        cards[1],
        "Flagged Alerts (24h)",
        &summary.flagged_alerts.to_string(),
        scheme.danger,
        Some("Real-time stream analysis."),
    );
    render_kpi_card(
        frame,
        cards[2],
        "Model Latency",
        &summary.model_latency,
        scheme.success,
        Some("Pre-clearing transaction verification."),
    );
    render_kpi_card(
        frame,
        cards[3],
        "Adaptive Learning",
        &summary.adaptive_learning.to_string(),
        scheme.tone(summary.adaptive_learning.tone()),
        Some("Updating behavior profiles."),
    );
}

fn render_alert_table(frame: &mut Frame, area: Rect, data: &Dataset, state: &FraudState) {
    let rows = state.rows(data);
    let block = table_block(
        "Real-Time Fraud Alerts",
        &[
            (
                "Status",
                state.status.display_name().to_string(),
                filter_options::<AlertStatus>(),
            ),
            (
                "Type",
                state.kind.display_name().to_string(),
                filter_options::<TransactionType>(),
            ),
        ],
    );

    if rows.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        render_no_results_state(
            frame,
            inner,
            "status/type",
            &format!("{}/{}", state.status.display_name(), state.kind.display_name()),
        );
        return;
    }

    let table_rows: Vec<Row> = rows
        .iter()
        .map(|r| {
            Row::new(vec![
                Cell::from(Line::from(vec![
                    Span::styled(format!("{} ", r.id), Styles::text().bold()),
                    Span::styled(r.account.clone(), Styles::text_muted()),
                ])),
                Cell::from(Span::styled(format_usd(r.amount), Styles::text())),
                Cell::from(Span::styled(r.kind.label(), Styles::text_muted())),
                Cell::from(toned_text(
                    r.fraud_score.to_string(),
                    score_tone(f64::from(r.fraud_score)),
                )),
                Cell::from(truncate_str(&r.rule_trigger, 28)),
                Cell::from(badge(r.status)),
            ])
        })
        .collect();

    let header = Row::new(["Transaction / Account", "Amount", "Type", "Score", "Trigger Rule", "Status"])
        .style(header_style());
    let table = Table::new(
        table_rows,
        [
            Constraint::Length(24),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Length(5),
            Constraint::Min(16),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(Styles::selected());

    let mut table_state = TableState::default().with_selected(state.table.as_table_selection());
    frame.render_stateful_widget(table, area, &mut table_state);
}

/// Alert status breakdown over the whole stream plus the mean score.
fn render_status_panel(frame: &mut Frame, area: Rect, data: &Dataset) {
    let block = Block::default()
        .title(Span::styled(" Alert Mix ", Styles::section_title()))
        .borders(Borders::ALL)
        .border_style(Styles::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(inner);
    let average = mean(
        data.transaction_alerts
            .iter()
            .map(|a| f64::from(a.fraud_score)),
    );
    let line = match average {
        Some(avg) => Line::from(vec![
            Span::styled("Mean score ", Styles::label()),
            toned_text(format!("{avg:.1}"), score_tone(avg)),
        ]),
        None => Line::styled("No alerts", Styles::text_muted()),
    };
    frame.render_widget(Paragraph::new(line), parts[0]);

    render_breakdown::<_, AlertStatus>(frame, parts[1], &data.transaction_alerts);
}
