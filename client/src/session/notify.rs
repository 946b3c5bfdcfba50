//! # Notifiers
//!
//! Sinks for user-facing notifications. A GUI host plugs in its toast system;
//! headless hosts use [`TracingNotifier`].

use parking_lot::Mutex;

use crate::core::service::{Notification, NotificationLevel, Notifier};

/// Emits notifications as log events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Error => tracing::warn!(
                title = %notification.title,
                description = %notification.description,
                "User notification"
            ),
            NotificationLevel::Info | NotificationLevel::Success => tracing::info!(
                title = %notification.title,
                description = %notification.description,
                "User notification"
            ),
        }
    }
}

/// Keeps every notification in order; what tests and previews inspect
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn notifications(&self) -> Vec<Notification> {
        self.seen.lock().clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.seen.lock().last().cloned()
    }

    /// Drain recorded notifications
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.seen.lock())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().push(notification);
    }
}
