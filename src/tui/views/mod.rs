//! Render functions for the five dashboard views.
//!
//! Each view is a pure function of the dataset and that view's local state;
//! `ui::render` picks one with an exhaustive match on the active view.

mod aml;
mod audit;
mod ekyc;
mod fraud;
mod reporting;

pub use aml::render_aml;
pub use audit::render_audit;
pub use ekyc::render_ekyc;
pub use fraud::render_fraud;
pub use reporting::render_reporting;

use crate::model::{Variant, ViewId};
use crate::query::{breakdown, Filterable};
use crate::tui::badges::Toned;
use crate::tui::theme::{colors, Styles};
use crate::tui::widgets::{render_filter_indicator, HorizontalBar};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Heading line: accent marker plus the view title.
pub(crate) fn render_view_title(frame: &mut Frame, area: Rect, view: ViewId) {
    let accent = colors().view_accent(view);
    let line = Line::from(vec![
        Span::styled("▍", Style::default().fg(accent)),
        Span::styled(format!(" {}", view.title()), Style::default().fg(accent).bold()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Split `area` into `n` equal-width columns.
pub(crate) fn columns(area: Rect, n: u16) -> std::rc::Rc<[Rect]> {
    let constraints: Vec<Constraint> = (0..n).map(|_| Constraint::Ratio(1, u32::from(n))).collect();
    Layout::horizontal(constraints).split(area)
}

/// Bordered block whose title carries the table name and filter selectors.
pub(crate) fn table_block(title: &str, filters: &[(&str, String, Vec<&str>)]) -> Block<'static> {
    let mut spans = vec![Span::styled(format!(" {title} "), Styles::section_title())];
    for (name, current, options) in filters {
        spans.push(Span::raw("  "));
        spans.extend(render_filter_indicator(name, current, options));
    }
    spans.push(Span::raw(" "));
    Block::default()
        .title(Line::from(spans))
        .borders(Borders::ALL)
        .border_style(Styles::border())
}

/// Filter labels for a field, `All` first, for [`table_block`].
pub(crate) fn filter_options<K: Variant>() -> Vec<&'static str> {
    std::iter::once("All")
        .chain(K::ALL.iter().map(|k| k.label()))
        .collect()
}

/// One horizontal bar per variant of `K`, counting records in `table`.
pub(crate) fn render_breakdown<R, K>(frame: &mut Frame, area: Rect, table: &[R])
where
    R: Filterable<K>,
    K: Variant + Toned,
{
    let scheme = colors();
    for (i, share) in breakdown::<R, K>(table).into_iter().enumerate() {
        let y = area.y + i as u16;
        if y >= area.y + area.height {
            break;
        }
        let row = Rect::new(area.x, y, area.width, 1);
        frame.render_widget(
            HorizontalBar::new(share.key.label(), share.count, table.len())
                .color(scheme.tone(share.key.tone())),
            row,
        );
    }
}

/// Header row style for tables.
pub(crate) fn header_style() -> Style {
    Style::default().fg(colors().text_muted).bold()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Severity;

    #[test]
    fn test_filter_options_start_with_all() {
        assert_eq!(filter_options::<Severity>(), ["All", "Critical", "High", "Low"]);
    }

    #[test]
    fn test_columns_cover_area() {
        let area = Rect::new(0, 0, 100, 5);
        let cols = columns(area, 4);
        assert_eq!(cols.len(), 4);
        assert_eq!(cols.iter().map(|c| c.width).sum::<u16>(), 100);
    }
}
