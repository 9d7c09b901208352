//! Terminal lifecycle and the top-level frame layout.

use super::app::SuiteApp;
use super::events::{handle_key_event, handle_mouse_event, Event, EventHandler};
use super::theme::{colors, render_footer_hints, FooterHints, Styles};
use super::views;
use super::widgets::{
    check_terminal_size, render_popup, render_size_warning, spinner_frame, tab_bar_spans,
    MIN_HEIGHT, MIN_WIDTH,
};
use crate::model::ViewId;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use std::io::{self, stdout};

/// Run the dashboard until the user quits.
///
/// The terminal is restored even when setup or the event loop fails.
pub fn run_tui(app: &mut SuiteApp) -> io::Result<()> {
    let mouse = app.settings().mouse_enabled;

    enable_raw_mode()?;
    let result = setup_and_run(app, mouse);
    let restored = restore_terminal(mouse);

    result.and(restored)
}

fn setup_and_run(app: &mut SuiteApp, mouse: bool) -> io::Result<()> {
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let events = EventHandler::new(app.settings().tick_rate);
    event_loop(&mut terminal, &events, app)
}

/// Undo raw mode, mouse capture and the alternate screen. Every step runs.
fn restore_terminal(mouse: bool) -> io::Result<()> {
    let mut stdout = stdout();
    first_error([
        disable_raw_mode(),
        if mouse {
            execute!(stdout, DisableMouseCapture)
        } else {
            Ok(())
        },
        execute!(stdout, LeaveAlternateScreen),
        execute!(stdout, cursor::Show),
    ])
}

/// The first failure among already-run steps.
fn first_error(steps: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    steps.into_iter().collect()
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    events: &EventHandler,
    app: &mut SuiteApp,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse),
            Event::Resize(_, _) => {}
            Event::Tick => app.on_tick(),
        }

        if app.should_quit() {
            tracing::debug!("quit requested");
            return Ok(());
        }
    }
}

/// Draw one frame: header, tab bar, active view, status bar, footer and
/// the help overlay when open.
pub fn render(frame: &mut Frame, app: &SuiteApp) {
    let area = frame.area();

    if check_terminal_size(area.width, area.height).is_err() {
        render_size_warning(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(2), // Header
        Constraint::Length(3), // Tabs
        Constraint::Min(10),   // Content
        Constraint::Length(1), // Status bar
        Constraint::Length(1), // Footer
    ])
    .split(area);

    render_header(frame, chunks[0]);
    render_tabs(frame, chunks[1], app.active_view());

    let content = chunks[2];
    match app.active_view() {
        ViewId::Audit => views::render_audit(frame, content, &app.data, &app.tabs.audit),
        ViewId::Reporting => {
            views::render_reporting(frame, content, &app.data, &app.tabs.reporting, app.tick);
        }
        ViewId::Aml => views::render_aml(frame, content, &app.data, &app.tabs.aml),
        ViewId::Fraud => views::render_fraud(frame, content, &app.data, &app.tabs.fraud),
        ViewId::Ekyc => views::render_ekyc(frame, content, &app.data, &app.tabs.ekyc),
    }

    render_status_bar(frame, chunks[3], app);
    render_footer(frame, chunks[4], app.active_view());

    if app.show_help {
        render_popup(
            frame,
            area,
            "Help",
            help_lines(),
            60,
            80,
            colors().border_focused,
        );
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Line::from(vec![
        Span::styled(
            "SmartBank AI Compliance Suite",
            Style::default().fg(colors().primary).bold(),
        ),
        Span::styled(" │ ", Style::default().fg(colors().muted)),
        Span::styled("Compliance operations dashboard", Styles::text_muted()),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

fn render_tabs(frame: &mut Frame, area: Rect, active: ViewId) {
    let tabs: Vec<(&str, String)> = ViewId::ALL
        .iter()
        .map(|v| (v.tab_label(), (v.index() + 1).to_string()))
        .collect();
    let line = Line::from(tab_bar_spans(
        &tabs,
        active.index(),
        colors().view_accent(active),
    ));
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Styles::border());
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &SuiteApp) {
    let mut spans = vec![Span::raw(" ")];
    for (i, (name, value)) in app.active_state().filter_summary().into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(colors().muted)));
        }
        spans.push(Span::styled(format!("{name}: "), Styles::text_muted()));
        spans.push(Span::styled(value, Style::default().fg(colors().accent)));
    }

    let rows = app.active_state().table().total;
    spans.push(Span::styled(" │ ", Style::default().fg(colors().muted)));
    spans.push(Span::styled(format!("{rows} rows"), Styles::text_muted()));

    if let Some(kind) = app.tabs.reporting.generate.pending_kind() {
        spans.push(Span::styled(" │ ", Style::default().fg(colors().muted)));
        spans.push(Span::styled(
            format!("{} generating {}", spinner_frame(app.tick), kind),
            Style::default().fg(colors().progress),
        ));
    }

    if let Some(message) = app.status_message() {
        spans.push(Span::styled(" │ ", Style::default().fg(colors().muted)));
        spans.push(Span::styled("ℹ ", Style::default().fg(colors().accent)));
        spans.push(Span::styled(
            message.to_string(),
            Style::default().fg(colors().accent).bold(),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(Styles::status_bar()), area);
}

fn render_footer(frame: &mut Frame, area: Rect, view: ViewId) {
    let hints = FooterHints::for_view(view);
    let footer = Paragraph::new(Line::from(render_footer_hints(&hints)))
        .alignment(Alignment::Center)
        .style(Styles::text_muted());
    frame.render_widget(footer, area);
}

fn help_lines() -> Vec<Line<'static>> {
    let section = |title: &'static str| {
        Line::from(Span::styled(title, Style::default().fg(colors().primary).bold()))
    };
    let entry = |keys: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {keys:<14} "), Style::default().fg(colors().accent)),
            Span::styled(desc, Style::default().fg(colors().text)),
        ])
    };

    vec![
        Line::styled(
            "━━━ Keyboard Shortcuts ━━━",
            Style::default().fg(colors().accent).bold(),
        ),
        Line::from(""),
        section("Views"),
        entry("1-5", "Jump to a view"),
        entry("Tab/Shift+Tab", "Next / previous view"),
        Line::from(""),
        section("Tables"),
        entry("↑/↓ or j/k", "Move selection"),
        entry("PgUp/PgDn", "Move by a page"),
        entry("Home/End, G", "First / last row"),
        entry("f / F", "Cycle primary filter"),
        entry("s", "Cycle secondary filter"),
        Line::from(""),
        section("Reporting"),
        entry("r", "Change report type"),
        entry("g / Enter", "Generate report"),
        entry("c", "Cancel generation"),
        Line::from(""),
        section("General"),
        entry("T", "Cycle theme"),
        entry("?", "Toggle this help"),
        entry("q / Esc", "Quit"),
    ]
}
