//! Centralized theme and color scheme for the TUI.
//!
//! Views never pick raw colors for status values: each enumeration maps to
//! a [`Tone`] (see `badges`), and the active [`ColorScheme`] maps tones to
//! colors. Switching theme therefore restyles every badge consistently.

use crate::model::ViewId;
use ratatui::prelude::*;
use std::sync::RwLock;

/// Semantic emphasis of a status or score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Needs immediate attention (critical, fraud alert, sanction hit)
    Danger,
    /// Elevated but not urgent
    Warning,
    /// Resolved, verified, cleared
    Success,
    /// Newly raised, awaiting triage
    Info,
    /// Work underway
    Progress,
    /// No emphasis
    Neutral,
}

/// Color scheme for the TUI application.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // Tone colors
    pub danger: Color,
    pub warning: Color,
    pub success: Color,
    pub info: Color,
    pub progress: Color,
    pub neutral: Color,

    // Per-view accents, used for the active tab and view headings
    pub audit: Color,
    pub reporting: Color,
    pub aml: Color,
    pub fraud: Color,
    pub ekyc: Color,

    // UI element colors
    pub primary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub background_alt: Color,
    pub text: Color,
    pub text_muted: Color,
    pub selection: Color,
    pub chart_bar: Color,

    // Badge foreground colors (for text on colored backgrounds)
    pub badge_fg_dark: Color,
    pub badge_fg_light: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Dark theme (default); `const` so the global registry can start with it.
    pub const fn dark() -> Self {
        Self {
            danger: Color::Red,
            warning: Color::Yellow,
            success: Color::Green,
            info: Color::Cyan,
            progress: Color::Magenta,
            neutral: Color::DarkGray,

            audit: Color::Blue,
            reporting: Color::Magenta,
            aml: Color::Red,
            fraud: Color::Yellow,
            ekyc: Color::Green,

            primary: Color::Cyan,
            accent: Color::Yellow,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            background_alt: Color::Rgb(30, 30, 40),
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::Rgb(60, 60, 80),
            chart_bar: Color::Cyan,

            badge_fg_dark: Color::Black,
            badge_fg_light: Color::White,
        }
    }

    /// Light theme
    pub const fn light() -> Self {
        Self {
            danger: Color::Rgb(200, 0, 0),
            warning: Color::Rgb(180, 120, 0),
            success: Color::Rgb(0, 128, 0),
            info: Color::Rgb(0, 110, 150),
            progress: Color::Rgb(120, 40, 160),
            neutral: Color::Rgb(120, 120, 120),

            audit: Color::Rgb(30, 80, 200),
            reporting: Color::Rgb(120, 40, 160),
            aml: Color::Rgb(190, 30, 30),
            fraud: Color::Rgb(170, 120, 0),
            ekyc: Color::Rgb(0, 130, 80),

            primary: Color::Rgb(0, 110, 150),
            accent: Color::Rgb(180, 90, 0),
            muted: Color::Rgb(140, 140, 140),
            border: Color::Rgb(170, 170, 170),
            border_focused: Color::Rgb(0, 110, 150),
            background_alt: Color::Rgb(230, 230, 235),
            text: Color::Black,
            text_muted: Color::Rgb(90, 90, 90),
            selection: Color::Rgb(200, 210, 230),
            chart_bar: Color::Rgb(0, 110, 150),

            badge_fg_dark: Color::Black,
            badge_fg_light: Color::White,
        }
    }

    /// High contrast theme for accessibility
    pub const fn high_contrast() -> Self {
        Self {
            danger: Color::LightRed,
            warning: Color::LightYellow,
            success: Color::LightGreen,
            info: Color::LightCyan,
            progress: Color::LightMagenta,
            neutral: Color::White,

            audit: Color::LightBlue,
            reporting: Color::LightMagenta,
            aml: Color::LightRed,
            fraud: Color::LightYellow,
            ekyc: Color::LightGreen,

            primary: Color::LightCyan,
            accent: Color::LightYellow,
            muted: Color::Gray,
            border: Color::White,
            border_focused: Color::LightYellow,
            background_alt: Color::Black,
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::Blue,
            chart_bar: Color::LightCyan,

            badge_fg_dark: Color::Black,
            badge_fg_light: Color::Black,
        }
    }

    /// Color for a tone.
    pub const fn tone(&self, tone: Tone) -> Color {
        match tone {
            Tone::Danger => self.danger,
            Tone::Warning => self.warning,
            Tone::Success => self.success,
            Tone::Info => self.info,
            Tone::Progress => self.progress,
            Tone::Neutral => self.neutral,
        }
    }

    /// Foreground to use on a badge whose background is `tone`.
    pub const fn tone_badge_fg(&self, tone: Tone) -> Color {
        match tone {
            Tone::Danger | Tone::Progress | Tone::Neutral => self.badge_fg_light,
            Tone::Warning | Tone::Success | Tone::Info => self.badge_fg_dark,
        }
    }

    /// Accent color of a dashboard view.
    pub const fn view_accent(&self, view: ViewId) -> Color {
        match view {
            ViewId::Audit => self.audit,
            ViewId::Reporting => self.reporting,
            ViewId::Aml => self.aml,
            ViewId::Fraud => self.fraud,
            ViewId::Ekyc => self.ekyc,
        }
    }
}

/// Global theme instance (runtime switchable)
static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// Theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ColorScheme,
    pub name: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Names accepted by [`Theme::from_name`].
    pub const NAMES: [&'static str; 3] = ["dark", "light", "high-contrast"];

    pub const fn dark() -> Self {
        Self {
            colors: ColorScheme::dark(),
            name: "dark",
        }
    }

    pub const fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            name: "light",
        }
    }

    pub const fn high_contrast() -> Self {
        Self {
            colors: ColorScheme::high_contrast(),
            name: "high-contrast",
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "high-contrast" | "highcontrast" | "hc" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }

    /// Whether `name` names a known theme.
    pub fn is_known(name: &str) -> bool {
        matches!(
            name.to_lowercase().as_str(),
            "dark" | "light" | "high-contrast" | "highcontrast" | "hc"
        )
    }

    /// Get the next theme in the rotation
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            "light" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}

// A poisoned lock still holds a usable theme, so readers recover it.
fn read_theme() -> std::sync::RwLockReadGuard<'static, Theme> {
    THEME.read().unwrap_or_else(std::sync::PoisonError::into_inner)
}

fn write_theme() -> std::sync::RwLockWriteGuard<'static, Theme> {
    THEME.write().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Get the current theme name
pub fn current_theme_name() -> &'static str {
    read_theme().name
}

/// Set the current theme
pub fn set_theme(theme: Theme) {
    *write_theme() = theme;
}

/// Toggle to the next theme in rotation (dark -> light -> high-contrast -> dark)
pub fn toggle_theme() -> &'static str {
    let mut theme = write_theme();
    *theme = theme.next();
    theme.name
}

/// Convenience function to get current colors
pub fn colors() -> ColorScheme {
    read_theme().colors
}

// ============================================================================
// Style Helpers
// ============================================================================

/// Common style presets for consistent UI elements
pub struct Styles;

impl Styles {
    pub fn section_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    pub fn text() -> Style {
        Style::default().fg(colors().text)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(colors().text_muted)
    }

    pub fn label() -> Style {
        Style::default().fg(colors().muted)
    }

    /// Selected table row
    pub fn selected() -> Style {
        Style::default()
            .bg(colors().selection)
            .fg(colors().text)
            .bold()
    }

    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    pub fn status_bar() -> Style {
        Style::default().bg(colors().background_alt)
    }

    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().accent)
    }

    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_muted)
    }
}

// ============================================================================
// Footer Hints
// ============================================================================

/// View-specific footer hints
pub struct FooterHints;

impl FooterHints {
    /// Hints for a view, followed by the global ones.
    pub fn for_view(view: ViewId) -> Vec<(&'static str, &'static str)> {
        let mut hints = match view {
            ViewId::Audit => vec![("f", "severity"), ("s", "status")],
            ViewId::Reporting => vec![
                ("f", "status"),
                ("r", "report type"),
                ("g", "generate"),
                ("c", "cancel"),
            ],
            ViewId::Aml => vec![("f", "risk"), ("s", "status")],
            ViewId::Fraud => vec![("f", "status"), ("s", "type")],
            ViewId::Ekyc => vec![("f", "status")],
        };
        hints.extend(Self::global());
        hints
    }

    /// Global hints (always shown)
    pub fn global() -> Vec<(&'static str, &'static str)> {
        vec![
            ("1-5/Tab", "view"),
            ("↑↓/jk", "navigate"),
            ("T", "theme"),
            ("?", "help"),
            ("q", "quit"),
        ]
    }
}

/// Render footer hints as spans
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{key}]"), Styles::shortcut_key()));
        spans.push(Span::styled((*desc).to_string(), Styles::shortcut_desc()));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_rotation_returns_to_dark() {
        let start = Theme::dark();
        let cycled = start.next().next().next();
        assert_eq!(cycled.name, "dark");
    }

    #[test]
    fn test_from_name_aliases() {
        assert_eq!(Theme::from_name("HC").name, "high-contrast");
        assert_eq!(Theme::from_name("light").name, "light");
        assert_eq!(Theme::from_name("nonsense").name, "dark");
        assert!(Theme::is_known("highcontrast"));
        assert!(!Theme::is_known("solarized"));
    }

    #[test]
    fn test_every_view_has_footer_hints() {
        let global = FooterHints::global().len();
        for view in ViewId::ALL {
            assert!(FooterHints::for_view(view).len() > global);
        }
    }
}
