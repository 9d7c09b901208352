//! Terminal event pump and key/mouse handling.

use super::app::SuiteApp;
use super::theme::toggle_theme;
use crate::config::TuiPreferences;
use crate::model::ViewId;
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
    MouseEventKind,
};
use std::io;
use std::time::Duration;

/// Terminal events.
#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
}

/// Polls crossterm synchronously, emitting [`Event::Tick`] whenever a poll
/// interval passes quietly.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub const fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Wait up to one tick for the next event.
    pub fn next(&self) -> io::Result<Event> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) => Ok(Event::Key(key)),
                CrosstermEvent::Mouse(mouse) => Ok(Event::Mouse(mouse)),
                CrosstermEvent::Resize(width, height) => Ok(Event::Resize(width, height)),
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}

/// Handle a key press.
pub fn handle_key_event(app: &mut SuiteApp, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // The help overlay swallows keys until it is closed.
    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?' | 'q')) {
            app.show_help = false;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char(c @ '1'..='5') => {
            let index = (c as usize) - ('1' as usize);
            if let Some(view) = ViewId::from_index(index) {
                app.select_view(view);
            }
        }
        KeyCode::Tab => app.next_view(),
        KeyCode::BackTab => app.prev_view(),
        KeyCode::Char('f') => app.cycle_filter(true),
        KeyCode::Char('F') => app.cycle_filter(false),
        KeyCode::Char('s') => app.cycle_secondary_filter(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::Home => app.go_first(),
        KeyCode::End | KeyCode::Char('G') => app.go_last(),
        KeyCode::Char('r') => app.cycle_report_kind(),
        KeyCode::Char('g') | KeyCode::Enter => {
            // Refusals are already reported in the status bar.
            let _ = app.generate_report();
        }
        KeyCode::Char('c') => {
            if app.cancel_generation().is_none() {
                app.set_status("No report generation to cancel");
            }
        }
        KeyCode::Char('T') => cycle_theme(app),
        _ => {}
    }
}

/// Handle mouse input: the wheel moves the table selection.
pub fn handle_mouse_event(app: &mut SuiteApp, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollDown => app.select_next(),
        MouseEventKind::ScrollUp => app.select_prev(),
        MouseEventKind::Down(_) if app.show_help => app.show_help = false,
        _ => {}
    }
}

fn cycle_theme(app: &mut SuiteApp) {
    let name = toggle_theme();
    let prefs = TuiPreferences {
        theme: name.to_string(),
    };
    if let Err(e) = prefs.save() {
        tracing::warn!("Failed to save theme preference: {}", e);
    }
    app.set_status(format!("Theme: {name}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Severity;
    use crate::query::FilterChoice;

    fn press(app: &mut SuiteApp, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_event_handler_holds_only_tick_rate() {
        const HANDLER: EventHandler = EventHandler::new(Duration::from_millis(40));
        assert_eq!(HANDLER.tick_rate, Duration::from_millis(40));
    }

    #[test]
    fn test_number_keys_select_views() {
        let mut app = SuiteApp::with_builtin_data().unwrap();
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.active_view(), ViewId::Fraud);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.active_view(), ViewId::Audit);
    }

    #[test]
    fn test_tab_cycles_and_wraps() {
        let mut app = SuiteApp::with_builtin_data().unwrap();
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.active_view(), ViewId::Ekyc);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_view(), ViewId::Audit);
    }

    #[test]
    fn test_filter_keys() {
        let mut app = SuiteApp::with_builtin_data().unwrap();
        press(&mut app, KeyCode::Char('F'));
        assert_eq!(
            app.tabs.audit.severity.current,
            FilterChoice::Only(Severity::Low)
        );
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.tabs.audit.severity.current, FilterChoice::All);
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut app = SuiteApp::with_builtin_data().unwrap();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);

        press(&mut app, KeyCode::Char('q'));
        assert!(!app.show_help);
        assert!(!app.should_quit());

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_generate_key_without_kind_sets_status() {
        let mut app = SuiteApp::with_builtin_data().unwrap();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('g'));
        assert!(!app.is_generation_pending());
        assert!(app.status_message().unwrap_or_default().contains("disabled"));
    }

    #[test]
    fn test_report_kind_key_enables_generation() {
        let mut app = SuiteApp::with_builtin_data().unwrap();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Enter);
        assert!(app.is_generation_pending());
        press(&mut app, KeyCode::Char('c'));
        assert!(!app.is_generation_pending());
    }
}
