use address_form::notify::{Notifier, Severity};
use std::sync::{Arc, Mutex};

/// A notification captured by the mock.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedNotification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

/// Mock notifier recording every notification for assertion.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockNotifier {
    notifications: Arc<Mutex<Vec<CapturedNotification>>>,
}

#[allow(dead_code)]
impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<CapturedNotification> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn count_with_severity(&self, severity: Severity) -> usize {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.severity == severity)
            .count()
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, title: &str, description: &str, severity: Severity) {
        self.notifications.lock().unwrap().push(CapturedNotification {
            title: title.to_string(),
            description: description.to_string(),
            severity,
        });
    }
}
