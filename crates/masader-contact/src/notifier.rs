//! Transient user-facing notifications.

use std::sync::{Mutex, PoisonError};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A single toast-style message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// Capability for surfacing submission outcomes to the user.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);

    fn error(&self, message: &str);
}

/// Buffers notifications so a caller can forward them (e.g. in an HTTP response).
#[derive(Debug, Default)]
pub struct CollectingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl CollectingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything collected so far.
    pub fn notifications(&self) -> Vec<Notification> {
        self.lock().clone()
    }

    /// Drain the buffer.
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.lock())
    }

    fn push(&self, kind: NotificationKind, message: &str) {
        self.lock().push(Notification {
            kind,
            message: message.to_string(),
        });
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Notification>> {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Notifier for CollectingNotifier {
    fn success(&self, message: &str) {
        self.push(NotificationKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.push(NotificationKind::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_in_order_and_drains() {
        let notifier = CollectingNotifier::new();

        notifier.error("first");
        notifier.success("second");

        assert_eq!(
            notifier.notifications(),
            vec![
                Notification {
                    kind: NotificationKind::Error,
                    message: "first".to_string()
                },
                Notification {
                    kind: NotificationKind::Success,
                    message: "second".to_string()
                },
            ]
        );
        assert_eq!(notifier.take().len(), 2);
        assert!(notifier.notifications().is_empty());
    }

    #[test]
    fn serializes_kind_in_snake_case() {
        let json = serde_json::to_string(&Notification {
            kind: NotificationKind::Success,
            message: "ok".to_string(),
        })
        .unwrap();

        assert_eq!(json, r#"{"kind":"success","message":"ok"}"#);
    }
}
