//! Simulated report generation behind the reporting view's Generate control.
//!
//! A generation is a one-shot timer thread. It waits the configured delay in
//! short slices, checking its [`CancellationToken`] between slices, and then
//! reports completion over a channel. The UI thread drains that channel on
//! every tick via [`GenerateAction::poll`], so the pending flag only ever
//! flips on the UI thread.

use super::constants::GENERATION_POLL_SLICE_MS;
use crate::error::{Result, SuiteError};
use crate::model::{ReportKind, Variant};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Shared cancellation flag between a job and its timer thread.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Completion of a simulated generation, shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationNotice {
    pub kind: ReportKind,
    pub elapsed: Duration,
}

impl GenerationNotice {
    pub fn message(&self) -> String {
        format!(
            "{} report generated in {:.1}s",
            self.kind.label(),
            self.elapsed.as_secs_f64()
        )
    }
}

/// A running generation. Dropping it cancels the timer thread.
#[derive(Debug)]
pub struct ReportGeneration {
    kind: ReportKind,
    token: CancellationToken,
    rx: mpsc::Receiver<Duration>,
}

impl ReportGeneration {
    /// Spawn the timer thread for `kind`; completion arrives after `delay`.
    pub fn start(kind: ReportKind, delay: Duration) -> Result<Self> {
        let token = CancellationToken::new();
        let (tx, rx) = mpsc::channel();
        let thread_token = token.clone();

        thread::Builder::new()
            .name("report-generation".to_string())
            .spawn(move || {
                let started = Instant::now();
                let slice = Duration::from_millis(GENERATION_POLL_SLICE_MS);
                while started.elapsed() < delay {
                    if thread_token.is_cancelled() {
                        return;
                    }
                    thread::sleep(slice.min(delay.saturating_sub(started.elapsed())));
                }
                if !thread_token.is_cancelled() {
                    // The receiver is gone once the job is dropped; nothing to report then.
                    let _ = tx.send(started.elapsed());
                }
            })
            .map_err(|e| SuiteError::Io {
                path: None,
                message: format!("failed to spawn report generation timer: {e}"),
                source: e,
            })?;

        tracing::info!(kind = kind.key(), delay_ms = delay.as_millis() as u64, "report generation started");
        Ok(Self { kind, token, rx })
    }

    pub fn kind(&self) -> ReportKind {
        self.kind
    }

    /// Handle to this job's cancellation flag.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Non-blocking check for completion.
    pub fn try_complete(&self) -> Option<GenerationNotice> {
        if self.token.is_cancelled() {
            return None;
        }
        self.rx.try_recv().ok().map(|elapsed| GenerationNotice {
            kind: self.kind,
            elapsed,
        })
    }
}

impl Drop for ReportGeneration {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// The Generate control: the selected report kind plus at most one running
/// generation.
#[derive(Debug)]
pub struct GenerateAction {
    selected: Option<ReportKind>,
    delay: Duration,
    running: Option<ReportGeneration>,
}

impl GenerateAction {
    pub fn new(selected: Option<ReportKind>, delay: Duration) -> Self {
        Self {
            selected,
            delay,
            running: None,
        }
    }

    pub fn selected(&self) -> Option<ReportKind> {
        self.selected
    }

    pub fn select(&mut self, kind: Option<ReportKind>) {
        self.selected = kind;
    }

    /// Cycle the picker: none → each kind → none.
    pub fn cycle_kind(&mut self) {
        self.selected = match self.selected {
            None => ReportKind::ALL.first().copied(),
            Some(current) => ReportKind::ALL
                .iter()
                .position(|k| *k == current)
                .and_then(|i| ReportKind::ALL.get(i + 1))
                .copied(),
        };
    }

    /// The control is enabled once a kind is selected.
    pub fn is_enabled(&self) -> bool {
        self.selected.is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.running.is_some()
    }

    /// Kind of the running generation, if any.
    pub fn pending_kind(&self) -> Option<ReportKind> {
        self.running.as_ref().map(ReportGeneration::kind)
    }

    /// Start generating the selected kind.
    pub fn trigger(&mut self) -> Result<ReportKind> {
        if let Some(job) = &self.running {
            return Err(SuiteError::ActionBusy(job.kind().label().to_string()));
        }
        let kind = self.selected.ok_or(SuiteError::ActionDisabled)?;
        self.running = Some(ReportGeneration::start(kind, self.delay)?);
        Ok(kind)
    }

    /// Cancel the running generation, returning its kind.
    pub fn cancel(&mut self) -> Option<ReportKind> {
        let job = self.running.take()?;
        job.cancel();
        tracing::debug!(kind = job.kind().key(), "report generation cancelled");
        Some(job.kind())
    }

    /// Apply a completion if one has arrived; called on every UI tick.
    pub fn poll(&mut self) -> Option<GenerationNotice> {
        let notice = self.running.as_ref()?.try_complete()?;
        self.running = None;
        tracing::info!(kind = notice.kind.key(), "report generation completed");
        Some(notice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wait_for_notice(action: &mut GenerateAction, timeout: Duration) -> Option<GenerationNotice> {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if let Some(notice) = action.poll() {
                return Some(notice);
            }
            thread::sleep(Duration::from_millis(10));
        }
        None
    }

    #[test]
    fn test_pending_flips_true_then_false() {
        let mut action = GenerateAction::new(Some(ReportKind::Lcr), Duration::from_millis(300));
        assert!(!action.is_pending());

        assert_eq!(action.trigger().unwrap(), ReportKind::Lcr);
        assert!(action.is_pending());

        thread::sleep(Duration::from_millis(50));
        assert!(action.poll().is_none());
        assert!(action.is_pending());

        let notice = wait_for_notice(&mut action, Duration::from_secs(5)).unwrap();
        assert_eq!(notice.kind, ReportKind::Lcr);
        assert!(notice.elapsed >= Duration::from_millis(300));
        assert!(!action.is_pending());
    }

    #[test]
    fn test_trigger_without_kind_is_disabled() {
        let mut action = GenerateAction::new(None, Duration::from_millis(10));
        assert!(!action.is_enabled());
        assert!(matches!(action.trigger(), Err(SuiteError::ActionDisabled)));
        assert!(!action.is_pending());
    }

    #[test]
    fn test_trigger_while_pending_is_busy() {
        let mut action = GenerateAction::new(Some(ReportKind::Sar), Duration::from_secs(10));
        action.trigger().unwrap();
        match action.trigger() {
            Err(SuiteError::ActionBusy(kind)) => assert_eq!(kind, "SAR"),
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(action.cancel(), Some(ReportKind::Sar));
    }

    #[test]
    fn test_cancel_suppresses_completion() {
        let mut action = GenerateAction::new(Some(ReportKind::Ctr), Duration::from_millis(40));
        action.trigger().unwrap();
        assert_eq!(action.cancel(), Some(ReportKind::Ctr));
        assert!(!action.is_pending());

        thread::sleep(Duration::from_millis(120));
        assert!(action.poll().is_none());
        assert_eq!(action.cancel(), None);
    }

    #[test]
    fn test_drop_cancels_token() {
        let job = ReportGeneration::start(ReportKind::Nsfr, Duration::from_secs(10)).unwrap();
        let token = job.token();
        assert!(!token.is_cancelled());
        drop(job);
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_cycle_kind_passes_through_none() {
        let mut action = GenerateAction::new(None, Duration::ZERO);
        let mut seen = Vec::new();
        for _ in 0..=ReportKind::ALL.len() {
            action.cycle_kind();
            seen.push(action.selected());
        }
        assert_eq!(seen.first(), Some(&Some(ReportKind::Lcr)));
        assert_eq!(seen.last(), Some(&None));
        assert_eq!(seen.len(), ReportKind::ALL.len() + 1);
    }

    #[test]
    fn test_notice_message() {
        let notice = GenerationNotice {
            kind: ReportKind::Finra4530,
            elapsed: Duration::from_millis(2000),
        };
        assert_eq!(notice.message(), "FINRA 4530 report generated in 2.0s");
    }
}
