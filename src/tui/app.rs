//! Application state for the dashboard TUI.

use super::app_states::{AmlState, AuditState, EkycState, FraudState, ReportingState};
use super::constants::STATUS_AUTO_CLEAR_SECS;
use super::traits::ViewState;
use super::viewmodel::StatusMessage;
use crate::config::SuiteConfig;
use crate::error::{Result, SuiteError};
use crate::model::{Dataset, ReportKind, Variant, ViewId};
use std::time::Duration;

/// Runtime settings derived from the config file and command line.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub initial_view: ViewId,
    pub tick_rate: Duration,
    pub generation_delay: Duration,
    pub default_report_kind: Option<ReportKind>,
    pub mouse_enabled: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self::from_config(&SuiteConfig::default())
    }
}

impl AppSettings {
    pub fn from_config(config: &SuiteConfig) -> Self {
        Self {
            initial_view: config.tui.default_view,
            tick_rate: config.tui.tick_rate(),
            generation_delay: config.reporting.generation_delay(),
            default_report_kind: config.reporting.report_kind(),
            mouse_enabled: config.tui.mouse_enabled,
        }
    }
}

/// Per-tab UI state container.
#[derive(Debug)]
pub struct TabStates {
    pub(crate) audit: AuditState,
    pub(crate) reporting: ReportingState,
    pub(crate) aml: AmlState,
    pub(crate) fraud: FraudState,
    pub(crate) ekyc: EkycState,
}

impl TabStates {
    fn new(settings: &AppSettings) -> Self {
        Self {
            audit: AuditState::default(),
            reporting: ReportingState::new(settings.default_report_kind, settings.generation_delay),
            aml: AmlState::default(),
            fraud: FraudState::default(),
            ekyc: EkycState::default(),
        }
    }
}

/// The dashboard: the dataset, which view is shown, and each view's
/// local state.
pub struct SuiteApp {
    pub(crate) data: Dataset,
    pub(crate) active_view: ViewId,
    pub(crate) tabs: TabStates,
    pub(crate) status: StatusMessage,
    pub(crate) show_help: bool,
    pub(crate) should_quit: bool,
    /// Tick counter for animations
    pub(crate) tick: u64,
    settings: AppSettings,
}

impl SuiteApp {
    pub fn new(data: Dataset, settings: AppSettings) -> Self {
        let mut app = Self {
            data,
            active_view: settings.initial_view,
            tabs: TabStates::new(&settings),
            status: StatusMessage::with_auto_clear(Duration::from_secs(STATUS_AUTO_CLEAR_SECS)),
            show_help: false,
            should_quit: false,
            tick: 0,
            settings,
        };
        app.sync_active_rows();
        app
    }

    /// App over the built-in dataset with default settings.
    pub fn with_builtin_data() -> Result<Self> {
        Ok(Self::new(Dataset::builtin()?, AppSettings::default()))
    }

    pub fn active_view(&self) -> ViewId {
        self.active_view
    }

    pub fn data(&self) -> &Dataset {
        &self.data
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status.peek()
    }

    // ========================================================================
    // View selection
    // ========================================================================

    /// Show `view`. Leaving a view discards its local state.
    pub fn select_view(&mut self, view: ViewId) {
        if view == self.active_view {
            return;
        }
        let previous = self.active_view;
        self.reset_view_state(previous);
        self.active_view = view;
        self.sync_active_rows();
        tracing::debug!(from = %previous, to = %view, "view selected");
    }

    /// Select a view by key or tab number, rejecting unknown identifiers
    /// without touching any state.
    pub fn select_view_by_name(&mut self, name: &str) -> Result<()> {
        let view: ViewId = name.parse()?;
        self.select_view(view);
        Ok(())
    }

    pub fn next_view(&mut self) {
        self.select_view(self.active_view.next());
    }

    pub fn prev_view(&mut self) {
        self.select_view(self.active_view.prev());
    }

    fn reset_view_state(&mut self, view: ViewId) {
        match view {
            ViewId::Audit => self.tabs.audit = AuditState::default(),
            ViewId::Reporting => {
                if let Some(kind) = self.tabs.reporting.generate.cancel() {
                    self.status
                        .set(format!("{} report generation cancelled", kind.label()));
                }
                self.tabs.reporting = ReportingState::new(
                    self.settings.default_report_kind,
                    self.settings.generation_delay,
                );
            }
            ViewId::Aml => self.tabs.aml = AmlState::default(),
            ViewId::Fraud => self.tabs.fraud = FraudState::default(),
            ViewId::Ekyc => self.tabs.ekyc = EkycState::default(),
        }
    }

    // ========================================================================
    // Active view dispatch
    // ========================================================================

    pub(crate) fn active_state(&self) -> &dyn ViewState {
        match self.active_view {
            ViewId::Audit => &self.tabs.audit,
            ViewId::Reporting => &self.tabs.reporting,
            ViewId::Aml => &self.tabs.aml,
            ViewId::Fraud => &self.tabs.fraud,
            ViewId::Ekyc => &self.tabs.ekyc,
        }
    }

    fn active_state_mut(&mut self) -> &mut dyn ViewState {
        match self.active_view {
            ViewId::Audit => &mut self.tabs.audit,
            ViewId::Reporting => &mut self.tabs.reporting,
            ViewId::Aml => &mut self.tabs.aml,
            ViewId::Fraud => &mut self.tabs.fraud,
            ViewId::Ekyc => &mut self.tabs.ekyc,
        }
    }

    fn sync_active_rows(&mut self) {
        let rows = self.active_state().visible_rows(&self.data);
        self.active_state_mut().table_mut().sync_total(rows);
    }

    pub fn cycle_filter(&mut self, forward: bool) {
        self.active_state_mut().cycle_filter(forward);
        self.sync_active_rows();
        tracing::debug!(view = %self.active_view, filters = ?self.active_state().filter_summary(), "filter changed");
    }

    pub fn cycle_secondary_filter(&mut self) {
        self.active_state_mut().cycle_secondary_filter();
        self.sync_active_rows();
        tracing::debug!(view = %self.active_view, filters = ?self.active_state().filter_summary(), "filter changed");
    }

    pub fn select_next(&mut self) {
        self.active_state_mut().select_next();
    }

    pub fn select_prev(&mut self) {
        self.active_state_mut().select_prev();
    }

    pub fn page_down(&mut self) {
        self.active_state_mut().page_down();
    }

    pub fn page_up(&mut self) {
        self.active_state_mut().page_up();
    }

    pub fn go_first(&mut self) {
        self.active_state_mut().go_first();
    }

    pub fn go_last(&mut self) {
        self.active_state_mut().go_last();
    }

    // ========================================================================
    // Report generation (reporting view only)
    // ========================================================================

    pub fn cycle_report_kind(&mut self) {
        if self.active_view != ViewId::Reporting {
            return;
        }
        let generate = &mut self.tabs.reporting.generate;
        generate.cycle_kind();
        match generate.selected() {
            Some(kind) => self.status.set(format!("Report type: {}", kind.title())),
            None => self.status.set("No report type selected"),
        }
    }

    /// Start generating the selected report.
    pub fn generate_report(&mut self) -> Result<ReportKind> {
        if self.active_view != ViewId::Reporting {
            return Err(SuiteError::ActionDisabled);
        }
        match self.tabs.reporting.generate.trigger() {
            Ok(kind) => {
                self.status.set(format!("Generating {} report...", kind.label()));
                Ok(kind)
            }
            Err(e) => {
                self.status.set(e.to_string());
                Err(e)
            }
        }
    }

    pub fn cancel_generation(&mut self) -> Option<ReportKind> {
        let kind = self.tabs.reporting.generate.cancel()?;
        self.status
            .set(format!("{} report generation cancelled", kind.label()));
        Some(kind)
    }

    pub fn is_generation_pending(&self) -> bool {
        self.tabs.reporting.generate.is_pending()
    }

    // ========================================================================
    // Misc
    // ========================================================================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status.set(message);
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Advance animations, expire the status message and apply a finished
    /// generation.
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.status.expire();
        if let Some(notice) = self.tabs.reporting.generate.poll() {
            self.status.set(notice.message());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Severity;
    use crate::query::FilterChoice;
    use std::time::Instant;

    fn app() -> SuiteApp {
        SuiteApp::with_builtin_data().unwrap()
    }

    #[test]
    fn test_initial_view_is_audit() {
        assert_eq!(app().active_view(), ViewId::Audit);
    }

    #[test]
    fn test_select_view_by_name_rejects_unknown() {
        let mut app = app();
        app.select_view(ViewId::Fraud);
        let err = app.select_view_by_name("settings").unwrap_err();
        assert!(matches!(err, SuiteError::InvalidView(_)));
        assert_eq!(app.active_view(), ViewId::Fraud);

        app.select_view_by_name("EKYC").unwrap();
        assert_eq!(app.active_view(), ViewId::Ekyc);
        app.select_view_by_name("2").unwrap();
        assert_eq!(app.active_view(), ViewId::Reporting);
    }

    #[test]
    fn test_leaving_view_resets_its_filter() {
        let mut app = app();
        app.cycle_filter(true);
        assert_eq!(
            app.tabs.audit.severity.current,
            FilterChoice::Only(Severity::Critical)
        );

        app.next_view();
        app.prev_view();
        assert_eq!(app.tabs.audit.severity.current, FilterChoice::All);
    }

    #[test]
    fn test_reselecting_same_view_keeps_state() {
        let mut app = app();
        app.cycle_filter(true);
        app.select_view(ViewId::Audit);
        assert_eq!(
            app.tabs.audit.severity.current,
            FilterChoice::Only(Severity::Critical)
        );
    }

    #[test]
    fn test_generate_outside_reporting_is_disabled() {
        let mut app = app();
        assert!(matches!(app.generate_report(), Err(SuiteError::ActionDisabled)));
    }

    #[test]
    fn test_generation_completes_on_tick() {
        let settings = AppSettings {
            initial_view: ViewId::Reporting,
            generation_delay: Duration::from_millis(50),
            default_report_kind: Some(ReportKind::Lcr),
            ..AppSettings::default()
        };
        let mut app = SuiteApp::new(Dataset::builtin().unwrap(), settings);

        app.generate_report().unwrap();
        assert!(app.is_generation_pending());

        let deadline = Instant::now() + Duration::from_secs(5);
        while app.is_generation_pending() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(10));
            app.on_tick();
        }
        assert!(!app.is_generation_pending());
        assert!(app.status_message().unwrap_or_default().contains("LCR report generated"));
    }

    #[test]
    fn test_switching_tab_cancels_generation() {
        let settings = AppSettings {
            initial_view: ViewId::Reporting,
            generation_delay: Duration::from_secs(30),
            default_report_kind: Some(ReportKind::Sar),
            ..AppSettings::default()
        };
        let mut app = SuiteApp::new(Dataset::builtin().unwrap(), settings);
        app.generate_report().unwrap();

        app.select_view(ViewId::Aml);
        assert!(!app.is_generation_pending());
        assert_eq!(app.status_message(), Some("SAR report generation cancelled"));
    }

    #[test]
    fn test_generate_without_kind_reports_refusal() {
        let settings = AppSettings {
            initial_view: ViewId::Reporting,
            ..AppSettings::default()
        };
        let mut app = SuiteApp::new(Dataset::builtin().unwrap(), settings);
        assert!(matches!(app.generate_report(), Err(SuiteError::ActionDisabled)));
        assert!(app.status_message().is_some());
    }
}
