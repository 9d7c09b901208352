//! eKYC onboarding and verification view.

use super::{columns, filter_options, header_style, render_breakdown, render_view_title, table_block};
use crate::model::{Dataset, VerificationCaseRecord, VerificationStatus, ViewId};
use crate::tui::app_states::EkycState;
use crate::tui::badges::{badge, toned_text};
use crate::tui::theme::{colors, Styles, Tone};
use crate::tui::widgets::{render_kpi_card, render_no_results_state};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

pub fn render_ekyc(frame: &mut Frame, area: Rect, data: &Dataset, state: &EkycState) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Min(8),
    ])
    .split(area);

    render_view_title(frame, chunks[0], ViewId::Ekyc);
    render_kpis(frame, chunks[1], data);

    let body = Layout::horizontal([Constraint::Min(60), Constraint::Length(32)]).split(chunks[2]);
    render_case_table(frame, body[0], data, state);
    render_case_detail(frame, body[1], data, state);
}

fn render_kpis(frame: &mut Frame, area: Rect, data: &Dataset) {
    let summary = &data.ekyc_summary;
    let scheme = colors();
    let cards = columns(area, 4);

    render_kpi_card(
        frame,
        cards[0],
        "Average Onboarding Time",
        &format!("{} (Target: {})", summary.avg_onboarding_time, summary.onboarding_target),
        scheme.success,
        Some("Reduced from 3 days to under 30 seconds."),
    );
    render_kpi_card(
        frame,
        cards[1],
        "Success Rate",
        &format!("{:.1}%", summary.success_rate),
        scheme.text,
        Some(&format!("Total verifications: {}.", summary.total_verifications)),
    );
    render_kpi_card(
        frame,
        cards[2],
        "OCR Accuracy",
        &format!("{:.1}%", summary.ocr_accuracy),
        scheme.primary,
        Some("Key data extraction precision."),
    );
    render_kpi_card(
        frame,
        cards[3],
        "Fraud Blocks (7d)",
        &summary.fraud_blocks.to_string(),
        scheme.danger,
        Some("Document forgery and face spoofing."),
    );
}

fn face_match_tone(case: &VerificationCaseRecord) -> Tone {
    if case.face_match_failed() {
        Tone::Danger
    } else {
        Tone::Success
    }
}

fn tamper_tone(case: &VerificationCaseRecord) -> Tone {
    if case.tamper_suspected() {
        Tone::Danger
    } else {
        Tone::Success
    }
}

fn watchlist_span(hit: bool) -> Span<'static> {
    if hit {
        toned_text("HIT", Tone::Danger)
    } else {
        toned_text("CLEARED", Tone::Success)
    }
}

fn render_case_table(frame: &mut Frame, area: Rect, data: &Dataset, state: &EkycState) {
    let rows = state.rows(data);
    let block = table_block(
        "Recent Verification & Document Analysis",
        &[(
            "Status",
            state.status.display_name().to_string(),
            filter_options::<VerificationStatus>(),
        )],
    );

    if rows.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        render_no_results_state(frame, inner, "status", state.status.display_name());
        return;
    }

    let table_rows: Vec<Row> = rows
        .iter()
        .map(|c| {
            Row::new(vec![
                Cell::from(Line::from(vec![
                    Span::styled(format!("{} ", c.applicant_name), Styles::text().bold()),
                    Span::styled(c.case_id.clone(), Styles::text_muted()),
                ])),
                Cell::from(toned_text(format!("{:.1}%", c.face_match_score), face_match_tone(c))),
                Cell::from(toned_text(format!("{:.1}%", c.doc_tamper_score), tamper_tone(c))),
                Cell::from(watchlist_span(c.watch_list_hit)),
                Cell::from(badge(c.status)),
            ])
        })
        .collect();

    let header = Row::new(["Applicant / Case", "Face Match", "Doc Tamper", "Watchlist", "Status"])
        .style(header_style());
    let table = Table::new(
        table_rows,
        [
            Constraint::Min(22),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(9),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(Styles::selected());

    let mut table_state = TableState::default().with_selected(state.table.as_table_selection());
    frame.render_stateful_widget(table, area, &mut table_state);
}

/// Details of the highlighted case above the status breakdown.
fn render_case_detail(frame: &mut Frame, area: Rect, data: &Dataset, state: &EkycState) {
    let block = Block::default()
        .title(Span::styled(" Case Detail ", Styles::section_title()))
        .borders(Borders::ALL)
        .border_style(Styles::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::vertical([Constraint::Length(7), Constraint::Min(0)]).split(inner);

    let lines = match state.selected_case(data) {
        Some(case) => vec![
            Line::styled(case.applicant_name.clone(), Styles::text().bold()),
            Line::from(vec![
                Span::styled("Case      ", Styles::label()),
                Span::styled(case.case_id.clone(), Styles::text()),
            ]),
            Line::from(vec![
                Span::styled("Submitted ", Styles::label()),
                Span::styled(case.timestamp.format("%Y-%m-%d %H:%M").to_string(), Styles::text()),
            ]),
            Line::from(vec![
                Span::styled("Face      ", Styles::label()),
                toned_text(format!("{:.1}%", case.face_match_score), face_match_tone(case)),
            ]),
            Line::from(vec![
                Span::styled("Tamper    ", Styles::label()),
                toned_text(format!("{:.1}%", case.doc_tamper_score), tamper_tone(case)),
            ]),
            Line::from(vec![
                Span::styled("Watchlist ", Styles::label()),
                watchlist_span(case.watch_list_hit),
            ]),
            Line::from(vec![Span::styled("Status    ", Styles::label()), badge(case.status)]),
        ],
        None => vec![Line::styled("No case selected", Styles::text_muted())],
    };
    frame.render_widget(Paragraph::new(lines), parts[0]);

    render_breakdown::<_, VerificationStatus>(frame, parts[1], &data.verification_cases);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_tones_follow_thresholds() {
        let data = Dataset::builtin().unwrap();
        for case in &data.verification_cases {
            assert_eq!(
                face_match_tone(case) == Tone::Danger,
                case.face_match_score < VerificationCaseRecord::FACE_MATCH_FLOOR
            );
            assert_eq!(
                tamper_tone(case) == Tone::Danger,
                case.doc_tamper_score > VerificationCaseRecord::TAMPER_CEILING
            );
        }
    }
}
