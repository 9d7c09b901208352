//! Automated regulatory reporting view.

use super::{columns, filter_options, header_style, render_view_title, table_block};
use crate::model::{Dataset, ReportStatus, Variant, ViewId};
use crate::tui::app_states::ReportingState;
use crate::tui::badges::badge;
use crate::tui::task::GenerateAction;
use crate::tui::theme::{colors, Styles, Tone};
use crate::tui::widgets::{render_kpi_card, render_no_results_state, spinner_frame};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

pub fn render_reporting(
    frame: &mut Frame,
    area: Rect,
    data: &Dataset,
    state: &ReportingState,
    tick: u64,
) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Length(4),
        Constraint::Min(6),
    ])
    .split(area);

    render_view_title(frame, chunks[0], ViewId::Reporting);
    render_kpis(frame, chunks[1], data);
    render_generate_control(frame, chunks[2], &state.generate, tick);
    render_filings_table(frame, chunks[3], data, state);
}

fn render_kpis(frame: &mut Frame, area: Rect, data: &Dataset) {
    let kpis = &data.reporting_kpis;
    let scheme = colors();
    let cards = columns(area, 4);

    render_kpi_card(
        frame,
        cards[0],
        "Jurisdiction",
        &kpis.jurisdiction,
        scheme.text,
        Some(&format!("Coverage: {} jurisdictions.", kpis.jurisdictions_covered)),
    );
    render_kpi_card(
        frame,
        cards[1],
        "Upcoming Due Dates",
        &kpis.upcoming_due.to_string(),
        scheme.warning,
        Some("In the next 30 days."),
    );
    render_kpi_card(
        frame,
        cards[2],
        "Reports Generated",
        &kpis.reports_generated.to_string(),
        scheme.success,
        Some("Successfully submitted this quarter."),
    );
    render_kpi_card(
        frame,
        cards[3],
        "Total Time Saved",
        &kpis.time_saved,
        scheme.primary,
        Some("Annualized manual effort reduction."),
    );
}

/// Report-type picker and Generate button.
fn render_generate_control(frame: &mut Frame, area: Rect, action: &GenerateAction, tick: u64) {
    let scheme = colors();
    let accent = scheme.view_accent(ViewId::Reporting);

    let mut picker = vec![Span::styled("Report type: ", Styles::label())];
    match action.selected() {
        Some(kind) => picker.push(Span::styled(
            format!("‹ {} ›", kind.title()),
            Style::default().fg(accent).bold(),
        )),
        None => picker.push(Span::styled("‹ none selected ›", Styles::text_muted())),
    }
    picker.push(Span::styled("   [r] change", Styles::text_muted()));

    let button = match action.pending_kind() {
        Some(kind) => Line::from(vec![
            Span::styled(
                format!(" {} Generating {}... ", spinner_frame(tick), kind.label()),
                Style::default()
                    .fg(scheme.tone_badge_fg(Tone::Progress))
                    .bg(scheme.progress)
                    .bold(),
            ),
            Span::styled("  [c] cancel", Styles::text_muted()),
        ]),
        None if action.is_enabled() => Line::from(vec![
            Span::styled(
                " Generate Report ",
                Style::default().fg(scheme.badge_fg_dark).bg(accent).bold(),
            ),
            Span::styled("  [g] generate", Styles::text_muted()),
        ]),
        None => Line::from(vec![
            Span::styled(" Generate Report ", Style::default().fg(scheme.muted)),
            Span::styled("  select a report type first", Styles::text_muted()),
        ]),
    };

    let block = Block::default()
        .title(Span::styled(" Generate ", Styles::section_title()))
        .borders(Borders::ALL)
        .border_style(if action.is_pending() {
            Style::default().fg(scheme.border_focused)
        } else {
            Styles::border()
        });
    frame.render_widget(Paragraph::new(vec![Line::from(picker), button]).block(block), area);
}

fn render_filings_table(frame: &mut Frame, area: Rect, data: &Dataset, state: &ReportingState) {
    let rows = state.rows(data);
    let block = table_block(
        "Pending & Recent Regulatory Filings",
        &[(
            "Status",
            state.status.display_name().to_string(),
            filter_options::<ReportStatus>(),
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
        .map(|r| {
            Row::new(vec![
                Cell::from(Span::styled(r.name.clone(), Styles::text().bold())),
                Cell::from(Line::from(vec![
                    Span::styled(format!("{} ", r.period), Styles::text()),
                    Span::styled(format!("({})", r.cadence.label()), Styles::text_muted()),
                ])),
                Cell::from(Span::styled(
                    r.generated_on.format("%Y-%m-%d").to_string(),
                    Styles::text_muted(),
                )),
                Cell::from(Span::styled(r.size.clone(), Styles::text_muted())),
                Cell::from(Span::styled(
                    r.due_on.format("%Y-%m-%d").to_string(),
                    Style::default().fg(colors().accent),
                )),
                Cell::from(badge(r.status)),
            ])
        })
        .collect();

    let header = Row::new(["Report Name", "Period / Type", "Generated", "Size", "Due Date", "Status"])
        .style(header_style());
    let table = Table::new(
        table_rows,
        [
            Constraint::Min(24),
            Constraint::Length(22),
            Constraint::Length(11),
            Constraint::Length(8),
            Constraint::Length(11),
            Constraint::Length(13),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(Styles::selected());

    let mut table_state = TableState::default().with_selected(state.table.as_table_selection());
    frame.render_stateful_widget(table, area, &mut table_state);
}
