//! Notification seam.
//!
//! The surrounding application owns the actual toast subsystem; the form
//! only needs a narrow `notify(title, description, severity)` surface.

use std::fmt;

/// How a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Success => write!(f, "success"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Sink for user-visible notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, description: &str, severity: Severity);
}

/// Default notifier that writes notifications to the log.
///
/// Headless hosts (the CLI, tests without assertions on toasts) use this;
/// a UI host supplies its own implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, title: &str, description: &str, severity: Severity) {
        match severity {
            Severity::Success => tracing::info!(title, "{}", description),
            Severity::Error => tracing::error!(title, "{}", description),
        }
    }
}
