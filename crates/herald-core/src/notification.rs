use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};

/// Severity of a notification, determining how observers treat and render it.
///
/// Levels are ordered by severity (`Info < Warn < Error`), so they can be
/// compared against a configured threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Neutral informational message. Default value.
    #[default]
    Info,
    /// Indicates a non-critical issue the user should be aware of.
    Warn,
    /// Indicates an error or failure that may affect functionality.
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Info => write!(f, "INFO"),
            Level::Warn => write!(f, "WARN"),
            Level::Error => write!(f, "ERROR"),
        }
    }
}

/// A single notification event handed to every observer of a broadcast.
///
/// The message, level, and optional error payload are fixed at construction.
/// The only mutable piece is the consumed flag: an observer that fully acted
/// on the notification (e.g., displayed it) calls [`Notification::mark_consumed`]
/// so observers later in the delivery order can skip duplicate handling. The
/// flag never resets for the lifetime of the instance.
#[derive(Debug)]
pub struct Notification {
    /// Main message to be shown or recorded.
    message: String,
    /// Failure detail attached for display or inspection. This is carried as
    /// data; the subject never raises it.
    error: Option<anyhow::Error>,
    /// Severity of this notification.
    level: Level,
    /// Whether some observer already acted on this notification.
    consumed: AtomicBool,
}

impl Notification {
    /// Creates a notification with no attached error.
    pub fn new(message: impl Into<String>, level: Level) -> Self {
        Self {
            message: message.into(),
            error: None,
            level,
            consumed: AtomicBool::new(false),
        }
    }

    /// Creates a notification carrying a failure detail.
    pub fn with_error(message: impl Into<String>, error: anyhow::Error, level: Level) -> Self {
        Self {
            message: message.into(),
            error: Some(error),
            level,
            consumed: AtomicBool::new(false),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn error(&self) -> Option<&anyhow::Error> {
        self.error.as_ref()
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Whether a prior observer already acted on this notification.
    pub fn is_consumed(&self) -> bool {
        self.consumed.load(Ordering::Acquire)
    }

    /// Marks this notification as consumed. One-way: once set, stays set.
    pub fn mark_consumed(&self) {
        self.consumed.store(true, Ordering::Release);
    }
}

/// Renders as `"<LEVEL>: <message>"`, e.g. `"WARN: low disk"`.
impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_level_and_message() {
        let notification = Notification::new("low disk", Level::Warn);
        assert_eq!(notification.to_string(), "WARN: low disk");
        assert_eq!(
            Notification::new("ready", Level::Info).to_string(),
            "INFO: ready"
        );
        assert_eq!(
            Notification::new("boom", Level::Error).to_string(),
            "ERROR: boom"
        );
    }

    #[test]
    fn starts_unconsumed_and_without_error() {
        let notification = Notification::new("hello", Level::Info);
        assert!(!notification.is_consumed());
        assert!(notification.error().is_none());
        assert_eq!(notification.level(), Level::Info);
        assert_eq!(notification.message(), "hello");
    }

    #[test]
    fn consumed_flag_is_one_way() {
        let notification = Notification::new("hello", Level::Info);
        notification.mark_consumed();
        assert!(notification.is_consumed());
        notification.mark_consumed();
        assert!(notification.is_consumed());
    }

    #[test]
    fn carries_attached_error() {
        let notification =
            Notification::with_error("save failed", anyhow::anyhow!("disk full"), Level::Error);
        let error = notification.error().expect("error payload should be set");
        assert_eq!(error.to_string(), "disk full");
    }

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
    }
}
