//! Bar and gauge widgets for KPI cards and charts.

use super::truncate_str;
use crate::query::{max_value, scale};
use crate::tui::theme::colors;
use ratatui::{prelude::*, widgets::Widget};

/// Write `text` starting at `(x, y)`, clipped to `area`. Returns the next x.
fn put_str(buf: &mut Buffer, area: Rect, mut x: u16, y: u16, text: &str, style: Style) -> u16 {
    for ch in text.chars() {
        if x >= area.x + area.width {
            break;
        }
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char(ch).set_style(style);
        }
        x += 1;
    }
    x
}

/// A horizontal bar showing a category count against the table size.
pub struct HorizontalBar {
    label: String,
    value: usize,
    max_value: usize,
    color: Color,
}

impl HorizontalBar {
    pub fn new(label: impl Into<String>, value: usize, max_value: usize) -> Self {
        Self {
            label: label.into(),
            value,
            max_value,
            color: colors().primary,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

}

impl Widget for HorizontalBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 10 || area.height < 1 {
            return;
        }

        let label_width = 12.min(area.width as usize / 3);
        let count_width = 6;
        let bar_width = (area.width as usize).saturating_sub(label_width + count_width + 2);
        let y = area.y;

        let label = format!(
            "{:width$}",
            truncate_str(&self.label, label_width),
            width = label_width
        );
        let mut x = put_str(buf, area, area.x, y, &label, Style::default().fg(colors().text));
        x = put_str(buf, area, x, y, " ", Style::default());

        let filled = if self.max_value > 0 {
            (self.value.min(self.max_value) * bar_width) / self.max_value
        } else {
            0
        };
        for i in 0..bar_width {
            let (ch, style) = if i < filled {
                ('█', Style::default().fg(self.color))
            } else {
                ('░', Style::default().fg(colors().muted))
            };
            x = put_str(buf, area, x, y, &ch.to_string(), style);
        }

        let count = format!(" {:>5}", self.value);
        put_str(buf, area, x, y, &count, Style::default().fg(colors().primary).bold());
    }
}

/// A centered percentage figure with a caption underneath.
pub struct PercentageRing {
    percentage: f64,
    label: String,
    color: Color,
}

impl PercentageRing {
    pub fn new(percentage: f64, label: impl Into<String>) -> Self {
        Self {
            percentage: percentage.clamp(0.0, 100.0),
            label: label.into(),
            color: colors().primary,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Widget for PercentageRing {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 8 || area.height < 2 {
            return;
        }

        let pct = format!("{:.1}%", self.percentage);
        let center_y = area.y + area.height.saturating_sub(1) / 2;
        let pct_x = area.x + area.width.saturating_sub(pct.len() as u16) / 2;
        put_str(buf, area, pct_x, center_y, &pct, Style::default().fg(self.color).bold());

        if center_y + 1 < area.y + area.height {
            let label = truncate_str(&self.label, area.width as usize);
            let label_x = area.x
                + area
                    .width
                    .saturating_sub(unicode_width::UnicodeWidthStr::width(label.as_str()) as u16)
                    / 2;
            put_str(
                buf,
                area,
                label_x,
                center_y + 1,
                &label,
                Style::default().fg(colors().text_muted),
            );
        }
    }
}

/// Vertical bar chart: one labelled column per point, scaled to the largest
/// value so the tallest bar fills the chart.
pub struct TrendBars<'a> {
    points: &'a [(String, u32)],
    color: Color,
    highlight_max: bool,
}

impl<'a> TrendBars<'a> {
    pub fn new(points: &'a [(String, u32)]) -> Self {
        Self {
            points,
            color: colors().chart_bar,
            highlight_max: true,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn highlight_max(mut self, highlight: bool) -> Self {
        self.highlight_max = highlight;
        self
    }
}

impl Widget for TrendBars<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Value row, at least one bar row, label row.
        if self.points.is_empty() || area.height < 3 || area.width < self.points.len() as u16 {
            return;
        }

        let max = max_value(self.points.iter().map(|(_, v)| *v)).unwrap_or(0);
        let column_width = area.width / self.points.len() as u16;
        let bar_width = column_width.saturating_sub(1).max(1);
        let chart_height = area.height - 2;
        let label_y = area.y + area.height - 1;

        for (i, (label, value)) in self.points.iter().enumerate() {
            let column_x = area.x + i as u16 * column_width;
            let filled = (scale(*value, max) * f64::from(chart_height)).round() as u16;
            let color = if self.highlight_max && *value == max && max > 0 {
                colors().danger
            } else {
                self.color
            };

            for row in 0..filled {
                let y = label_y - 1 - row;
                for dx in 0..bar_width {
                    if let Some(cell) = buf.cell_mut((column_x + dx, y)) {
                        cell.set_char('█').set_style(Style::default().fg(color));
                    }
                }
            }

            let value_y = label_y - 1 - filled;
            let value_text = truncate_str(&value.to_string(), column_width as usize);
            put_str(buf, area, column_x, value_y, &value_text, Style::default().fg(colors().text));

            let label_text = truncate_str(label, column_width as usize);
            put_str(buf, area, column_x, label_y, &label_text, Style::default().fg(colors().text_muted));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect()
    }

    #[test]
    fn test_horizontal_bar_fills_share_and_prints_count() {
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        HorizontalBar::new("High", 2, 4).render(area, &mut buf);

        let line = row(&buf, 0);
        assert!(line.starts_with("High"));
        assert_eq!(line.matches('█').count(), 6);
        assert!(line.trim_end().ends_with(" 2"));
    }

    #[test]
    fn test_trend_bars_tallest_bar_fills_chart() {
        let points = vec![("Mon".to_string(), 5), ("Tue".to_string(), 10)];
        let area = Rect::new(0, 0, 8, 6);
        let mut buf = Buffer::empty(area);
        TrendBars::new(&points).render(area, &mut buf);

        // Rows 1..=4 are bar rows; the 10 bar reaches the top one.
        assert!(row(&buf, 1).contains('█'));
        assert!(row(&buf, 5).starts_with("Mon"));
        assert!(row(&buf, 0).contains("10"));
    }

    #[test]
    fn test_trend_bars_all_zero_draws_no_bars() {
        let points = vec![("Mon".to_string(), 0), ("Tue".to_string(), 0)];
        let area = Rect::new(0, 0, 8, 5);
        let mut buf = Buffer::empty(area);
        TrendBars::new(&points).render(area, &mut buf);

        for y in 0..4 {
            assert!(!row(&buf, y).contains('█'));
        }
    }

    #[test]
    fn test_horizontal_bar_full_and_empty() {
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        HorizontalBar::new("High", 2, 2).render(area, &mut buf);
        let line = row(&buf, 0);
        assert!(line.starts_with("High"));
        assert!(line.contains('█'));
        assert!(!line.contains('░'));
        assert!(line.trim_end().ends_with('2'));
    }
}
