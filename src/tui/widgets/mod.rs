//! Reusable widgets and render helpers shared by the dashboard views.

mod bars;

pub use bars::{HorizontalBar, PercentageRing, TrendBars};

use crate::tui::theme::{colors, Styles};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Render a popup overlay.
pub fn render_popup(
    frame: &mut ratatui::Frame,
    area: Rect,
    title: &str,
    content: Vec<Line<'static>>,
    percent_x: u16,
    percent_y: u16,
    border_color: Color,
) {
    let popup_area = centered_rect(percent_x, percent_y, area);
    frame.render_widget(Clear, popup_area);

    let popup = Paragraph::new(content)
        .block(
            Block::default()
                .title(format!(" {title} "))
                .title_style(Style::default().fg(border_color).bold())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(popup, popup_area);
}

/// Helper function to create a centered rectangle.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Truncate a string with ellipsis, using Unicode display width for accuracy.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;
    use unicode_width::UnicodeWidthStr;

    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }

    let budget = if max_width > 3 { max_width - 3 } else { max_width };
    let mut width = 0;
    let truncated: String = s
        .chars()
        .take_while(|ch| {
            let w = UnicodeWidthChar::width(*ch).unwrap_or(0);
            if width + w > budget {
                return false;
            }
            width += w;
            true
        })
        .collect();

    if max_width > 3 {
        format!("{truncated}...")
    } else {
        truncated
    }
}

/// Format a USD amount with thousands separators ("$12,500.00").
pub fn format_usd(amount: f64) -> String {
    let cents = (amount * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}.{:02}", cents % 100)
}

/// Spinner glyph for the given tick.
pub fn spinner_frame(tick: u64) -> &'static str {
    const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
    FRAMES[(tick / 2) as usize % FRAMES.len()]
}

/// Render a bordered KPI card: caption, headline value, optional footnote.
pub fn render_kpi_card(
    frame: &mut ratatui::Frame,
    area: Rect,
    caption: &str,
    value: &str,
    value_color: Color,
    footnote: Option<&str>,
) {
    let mut lines = vec![
        Line::styled(truncate_str(caption, area.width.saturating_sub(2) as usize), Styles::label()),
        Line::styled(value.to_string(), Style::default().fg(value_color).bold()),
    ];
    if let Some(note) = footnote {
        lines.push(Line::styled(
            truncate_str(note, area.width.saturating_sub(2) as usize),
            Styles::text_muted(),
        ));
    }

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(card, area);
}

/// Render a "no results" state for a filtered table.
pub fn render_no_results_state(
    frame: &mut ratatui::Frame,
    area: Rect,
    filter_name: &str,
    filter_value: &str,
) {
    let lines = vec![
        Line::from(""),
        Line::styled("No records match", Style::default().fg(colors().text)),
        Line::from(""),
        Line::from(vec![
            Span::styled("Filter: ", Style::default().fg(colors().text_muted)),
            Span::styled(
                format!("{filter_name} = {filter_value}"),
                Style::default().fg(colors().accent),
            ),
        ]),
        Line::from(""),
        Line::styled(
            "Press [f] to change the filter",
            Style::default().fg(colors().text_muted),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors().border)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Render a filter indicator showing every option with the current one
/// highlighted.
pub fn render_filter_indicator(
    filter_name: &str,
    current_value: &str,
    all_values: &[&str],
) -> Vec<Span<'static>> {
    let mut spans = vec![Span::styled(
        format!("{filter_name}: "),
        Style::default().fg(colors().text_muted),
    )];

    for (i, val) in all_values.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("→", Style::default().fg(colors().text_muted)));
        }
        if *val == current_value {
            spans.push(Span::styled(
                format!(" {val} "),
                Style::default()
                    .fg(colors().badge_fg_dark)
                    .bg(colors().accent)
                    .bold(),
            ));
        } else {
            spans.push(Span::styled(
                format!(" {val} "),
                Style::default().fg(colors().text_muted),
            ));
        }
    }

    spans
}

/// Generate tab spans for the tab bar.
pub fn tab_bar_spans(
    tabs: &[(&str, String)],
    selected: usize,
    accent_color: Color,
) -> Vec<Span<'static>> {
    let mut spans = vec![];

    for (i, (name, shortcut)) in tabs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(colors().border)));
        }

        if i == selected {
            spans.push(Span::styled(
                format!("[{shortcut}]"),
                Style::default().fg(accent_color).bold(),
            ));
            spans.push(Span::styled(
                format!(" {name} "),
                Style::default()
                    .fg(colors().badge_fg_dark)
                    .bg(accent_color)
                    .bold(),
            ));
        } else {
            spans.push(Span::styled(
                format!("[{shortcut}]"),
                Style::default().fg(colors().text_muted),
            ));
            spans.push(Span::styled(
                format!(" {name} "),
                Style::default().fg(colors().text_muted),
            ));
        }
    }

    spans
}

// ============================================================================
// Minimum Size Check
// ============================================================================

/// Minimum terminal size requirements.
pub const MIN_WIDTH: u16 = 80;
pub const MIN_HEIGHT: u16 = 24;

/// Check if terminal meets minimum size requirements.
pub fn check_terminal_size(width: u16, height: u16) -> Result<(), (u16, u16)> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        Err((MIN_WIDTH, MIN_HEIGHT))
    } else {
        Ok(())
    }
}

/// Render a "terminal too small" message.
pub fn render_size_warning(
    frame: &mut ratatui::Frame,
    area: Rect,
    required_width: u16,
    required_height: u16,
) {
    let lines = vec![
        Line::styled(
            "Terminal too small",
            Style::default().fg(colors().warning).bold(),
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("Current: "),
            Span::styled(
                format!("{}x{}", area.width, area.height),
                Style::default().fg(colors().text),
            ),
        ]),
        Line::from(vec![
            Span::raw("Required: "),
            Span::styled(
                format!("{required_width}x{required_height}"),
                Style::default().fg(colors().accent),
            ),
        ]),
        Line::from(""),
        Line::styled(
            "Please resize your terminal",
            Style::default().fg(colors().text_muted),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors().warning)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("Wire Transfer", 20), "Wire Transfer");
        assert_eq!(truncate_str("Wire Transfer", 8), "Wire ...");
        assert_eq!(truncate_str("abcdef", 3), "abc");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(12500.0), "$12,500.00");
        assert_eq!(format_usd(49.99), "$49.99");
        assert_eq!(format_usd(1_234_567.5), "$1,234,567.50");
        assert_eq!(format_usd(0.0), "$0.00");
    }

    #[test]
    fn test_check_terminal_size() {
        assert!(check_terminal_size(80, 24).is_ok());
        assert_eq!(check_terminal_size(79, 40), Err((MIN_WIDTH, MIN_HEIGHT)));
    }

    #[test]
    fn test_spinner_advances_every_other_tick() {
        assert_eq!(spinner_frame(0), spinner_frame(1));
        assert_ne!(spinner_frame(1), spinner_frame(2));
    }
}
