//! AML and sanctions screening view.

use super::{columns, filter_options, header_style, render_breakdown, render_view_title, table_block};
use crate::model::{Dataset, MatchStatus, RiskLevel, ViewId};
use crate::tui::app_states::AmlState;
use crate::tui::badges::{badge, toned_text};
use crate::tui::theme::{colors, Styles, Tone};
use crate::tui::widgets::{render_kpi_card, render_no_results_state, PercentageRing};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

/// High-risk alert count above which the risk panel turns red.
const HIGH_RISK_ALERT_THRESHOLD: u32 = 10;

fn high_risk_tone(alerts: u32) -> Tone {
    if alerts > HIGH_RISK_ALERT_THRESHOLD {
        Tone::Danger
    } else {
        Tone::Warning
    }
}

pub fn render_aml(frame: &mut Frame, area: Rect, data: &Dataset, state: &AmlState) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Min(8),
    ])
    .split(area);

    render_view_title(frame, chunks[0], ViewId::Aml);
    render_kpis(frame, chunks[1], data);

    let body = Layout::horizontal([Constraint::Length(32), Constraint::Min(40)]).split(chunks[2]);
    render_risk_panel(frame, body[0], data);
    render_match_table(frame, body[1], data, state);
}

fn render_kpis(frame: &mut Frame, area: Rect, data: &Dataset) {
    let summary = &data.risk_summary;
    let scheme = colors();
    let cards = columns(area, 3);

    render_kpi_card(
        frame,
        cards[0],
        "Total Customers",
        &summary.total_customers,
        scheme.text,
        Some("Screened against 15+ lists."),
    );
    render_kpi_card(
        frame,
        cards[1],
        "Pending Sanction Matches",
        &summary.sanction_matches.to_string(),
        scheme.danger,
        Some("Requires immediate manual review."),
    );
    render_kpi_card(
        frame,
        cards[2],
        "Name Match AI Speed",
        "< 100ms",
        scheme.success,
        Some("Real-time processing for new clients."),
    );
}

/// Coverage figure, high-risk alert count and the risk-level breakdown.
fn render_risk_panel(frame: &mut Frame, area: Rect, data: &Dataset) {
    let summary = &data.risk_summary;
    let scheme = colors();
    let block = Block::default()
        .title(Span::styled(" AI Risk Scoring Dashboard ", Styles::section_title()))
        .borders(Borders::ALL)
        .border_style(Styles::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(inner);

    let alert_tone = high_risk_tone(summary.high_risk_alerts);
    frame.render_widget(
        PercentageRing::new(f64::from(summary.screening_coverage), "Screening coverage")
            .color(scheme.tone(alert_tone)),
        parts[0],
    );

    let alerts = Line::from(vec![
        toned_text(summary.high_risk_alerts.to_string(), alert_tone),
        Span::styled(" High-Risk Alerts", Styles::text()),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(Paragraph::new(alerts), parts[1]);

    render_breakdown::<_, RiskLevel>(frame, parts[3], &data.sanction_matches);
}

fn render_match_table(frame: &mut Frame, area: Rect, data: &Dataset, state: &AmlState) {
    let rows = state.rows(data);
    let block = table_block(
        "Recent AI Match Alerts",
        &[
            ("Risk", state.risk.display_name().to_string(), filter_options::<RiskLevel>()),
            (
                "Status",
                state.status.display_name().to_string(),
                filter_options::<MatchStatus>(),
            ),
        ],
    );

    if rows.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        render_no_results_state(
            frame,
            inner,
            "risk/status",
            &format!("{}/{}", state.risk.display_name(), state.status.display_name()),
        );
        return;
    }

    let table_rows: Vec<Row> = rows
        .iter()
        .map(|r| {
            Row::new(vec![
                Cell::from(Line::from(vec![
                    Span::styled(format!("{} ", r.subject_name), Styles::text().bold()),
                    Span::styled(format!("({})", r.id), Styles::text_muted()),
                ])),
                Cell::from(toned_text(format!("{}%", r.match_score), match_score_tone(r.match_score))),
                Cell::from(Span::styled(r.source_list.clone(), Styles::text_muted())),
                Cell::from(badge(r.risk_level)),
                Cell::from(badge(r.status)),
            ])
        })
        .collect();

    let header = Row::new(["Customer Name", "Match Score", "Source List", "Risk", "Status"])
        .style(header_style());
    let table = Table::new(
        table_rows,
        [
            Constraint::Min(22),
            Constraint::Length(11),
            Constraint::Length(16),
            Constraint::Length(8),
            Constraint::Length(17),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(Styles::selected());

    let mut table_state = TableState::default().with_selected(state.table.as_table_selection());
    frame.render_stateful_widget(table, area, &mut table_state);
}

/// Name-match confidence: 90+ is a likely hit, 75+ needs a second look.
fn match_score_tone(score: u8) -> Tone {
    match score {
        90.. => Tone::Danger,
        75..=89 => Tone::Warning,
        _ => Tone::Success,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_score_tone_thresholds() {
        assert_eq!(match_score_tone(98), Tone::Danger);
        assert_eq!(match_score_tone(90), Tone::Danger);
        assert_eq!(match_score_tone(89), Tone::Warning);
        assert_eq!(match_score_tone(75), Tone::Warning);
        assert_eq!(match_score_tone(74), Tone::Success);
    }

    #[test]
    fn test_high_risk_tone_turns_red_above_ten() {
        assert_eq!(high_risk_tone(11), Tone::Danger);
        assert_eq!(high_risk_tone(10), Tone::Warning);
        assert_eq!(high_risk_tone(0), Tone::Warning);
    }
}
