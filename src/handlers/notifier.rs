use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::handlers::lock;
use crate::models::notification::{Notification, NotificationKind};

#[derive(Debug, Default)]
struct Slot {
    last_id: u64,
    active: Option<Notification>,
}

/// Page-wide notification area holding at most one message.
///
/// Showing a message replaces whatever is up. Each message is dismissed
/// after the TTL unless a newer one has taken its place by then. Must be
/// used from within a tokio runtime.
#[derive(Debug, Clone)]
pub struct Notifier {
    slot: Arc<Mutex<Slot>>,
    ttl: Duration,
}

impl Notifier {
    pub fn new(ttl: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
            ttl,
        }
    }

    pub fn show(&self, kind: NotificationKind, message: impl Into<String>) -> Notification {
        let notification = {
            let mut slot = lock(&self.slot);
            slot.last_id += 1;
            let notification = Notification {
                id: slot.last_id,
                kind,
                message: message.into(),
            };
            slot.active = Some(notification.clone());
            notification
        };

        let slot = Arc::downgrade(&self.slot);
        let id = notification.id;
        let ttl = self.ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            if let Some(slot) = slot.upgrade() {
                let mut slot = lock(&slot);
                if slot.active.as_ref().is_some_and(|active| active.id == id) {
                    slot.active = None;
                }
            }
        });

        notification
    }

    pub fn success(&self, message: impl Into<String>) -> Notification {
        self.show(NotificationKind::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> Notification {
        self.show(NotificationKind::Error, message)
    }

    pub fn info(&self, message: impl Into<String>) -> Notification {
        self.show(NotificationKind::Info, message)
    }

    /// Close button
    pub fn dismiss(&self) {
        lock(&self.slot).active = None;
    }

    pub fn current(&self) -> Option<Notification> {
        lock(&self.slot).active.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn newer_notification_replaces_older() {
        let notifier = Notifier::new(Duration::from_secs(5));
        notifier.error("first");
        let second = notifier.success("second");

        assert_eq!(notifier.current(), Some(second));
    }

    #[tokio::test(start_paused = true)]
    async fn notification_expires_after_ttl() {
        let notifier = Notifier::new(Duration::from_secs(5));
        notifier.info("hello");

        tokio::time::sleep(Duration::from_millis(4990)).await;
        assert!(notifier.current().is_some());

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(notifier.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn older_ttl_does_not_dismiss_replacement() {
        let notifier = Notifier::new(Duration::from_secs(5));
        notifier.info("old");

        tokio::time::sleep(Duration::from_secs(3)).await;
        let replacement = notifier.success("new");

        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert_eq!(notifier.current(), Some(replacement));

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(notifier.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_clears_immediately() {
        let notifier = Notifier::new(Duration::from_secs(5));
        notifier.info("bye");
        notifier.dismiss();
        assert!(notifier.current().is_none());
    }
}
