//! Status message management for the status bar.

use std::time::{Duration, Instant};

/// Manages temporary status messages with optional auto-clear.
///
/// Used to notify the user of actions such as "Generating LCR report..."
/// or a rejected command.
#[derive(Debug, Clone, Default)]
pub struct StatusMessage {
    /// The current message (if any)
    message: Option<String>,
    /// When the message was set (for auto-clear)
    set_at: Option<Instant>,
    /// Auto-clear duration (None = no auto-clear)
    auto_clear_after: Option<Duration>,
}

impl StatusMessage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a status message manager with auto-clear after duration.
    #[must_use]
    pub const fn with_auto_clear(duration: Duration) -> Self {
        Self {
            message: None,
            set_at: None,
            auto_clear_after: Some(duration),
        }
    }

    pub fn set(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.set_at = Some(Instant::now());
    }

    pub fn clear(&mut self) {
        self.message = None;
        self.set_at = None;
    }

    /// Drop the message if its auto-clear duration has elapsed.
    pub fn expire(&mut self) {
        if let (Some(set_at), Some(duration)) = (self.set_at, self.auto_clear_after) {
            if set_at.elapsed() >= duration {
                self.clear();
            }
        }
    }

    /// Get the current message (checking auto-clear if configured).
    pub fn message(&mut self) -> Option<&str> {
        self.expire();
        self.message.as_deref()
    }

    /// Get the current message without checking auto-clear.
    #[must_use]
    pub fn peek(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub const fn has_message(&self) -> bool {
        self.message.is_some()
    }

    /// Take the message, clearing it.
    pub fn take(&mut self) -> Option<String> {
        self.set_at = None;
        self.message.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_status_message_set_clear() {
        let mut status = StatusMessage::new();

        assert!(!status.has_message());
        assert!(status.peek().is_none());

        status.set("Report queued");
        assert!(status.has_message());
        assert_eq!(status.peek(), Some("Report queued"));

        status.clear();
        assert!(!status.has_message());
    }

    #[test]
    fn test_status_message_take() {
        let mut status = StatusMessage::new();
        status.set("Take me");
        assert_eq!(status.take(), Some("Take me".to_string()));
        assert!(!status.has_message());
    }

    #[test]
    fn test_status_message_auto_clear() {
        let mut status = StatusMessage::with_auto_clear(Duration::from_millis(50));

        status.set("Auto clear message");
        assert!(status.message().is_some());

        thread::sleep(Duration::from_millis(60));
        assert!(status.message().is_none());
    }

    #[test]
    fn test_status_message_no_auto_clear_default() {
        let mut status = StatusMessage::new();
        status.set("No auto clear");
        thread::sleep(Duration::from_millis(10));
        assert!(status.message().is_some());
    }
}
