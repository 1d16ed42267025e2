//! Transient UI notifications with timed auto-dismiss.
//!
//! `NotificationCenter` keeps the list of currently visible notifications;
//! rendering layers read it via `active()`. Each notification self-removes
//! after a fixed delay on a scheduled task, and the returned handle can
//! dismiss it early. Concurrent notifications coexist in the list with no
//! queueing policy.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

/// How long a notification stays visible before auto-dismiss
const DISMISS_AFTER_MS: u64 = 3000;

/// Notification category; selects the background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Level {
    #[default]
    Info,
    Success,
    Error,
}

impl Level {
    /// Background color as a hex RGB string.
    pub fn color(self) -> &'static str {
        match self {
            Level::Info => "#3b82f6",
            Level::Success => "#22c55e",
            Level::Error => "#ef4444",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub level: Level,
}

/// Handle to a shown notification. `dismiss()` removes it early and cancels
/// the auto-dismiss timer. Dropping the handle leaves the timer running.
pub struct NotificationHandle {
    id: u64,
    active: Arc<Mutex<Vec<Notification>>>,
    timer: JoinHandle<()>,
}

impl NotificationHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Remove the notification now instead of waiting for the timer.
    pub fn dismiss(self) {
        self.timer.abort();
        remove(&self.active, self.id);
    }
}

fn remove(active: &Mutex<Vec<Notification>>, id: u64) {
    let mut list = active.lock().unwrap_or_else(|e| e.into_inner());
    list.retain(|n| n.id != id);
}

/// Owner of the active notification list.
///
/// Clone is cheap and clones share the same list. `show` must be called from
/// within a tokio runtime, which drives the dismiss timers.
#[derive(Clone, Default)]
pub struct NotificationCenter {
    active: Arc<Mutex<Vec<Notification>>>,
    next_id: Arc<AtomicU64>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notification and schedule its removal after the fixed delay.
    pub fn show(&self, message: impl Into<String>, level: Level) -> NotificationHandle {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let notification = Notification {
            id,
            message: message.into(),
            level,
        };

        debug!(id, ?level, "showing notification");
        {
            let mut list = self.active.lock().unwrap_or_else(|e| e.into_inner());
            list.push(notification);
        }

        let active = self.active.clone();
        let timer = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(DISMISS_AFTER_MS)).await;
            remove(&active, id);
        });

        NotificationHandle {
            id,
            active: self.active.clone(),
            timer,
        }
    }

    /// Snapshot of the currently visible notifications.
    pub fn active(&self) -> Vec<Notification> {
        self.active
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_notification_auto_dismisses_after_delay() {
        let center = NotificationCenter::new();
        let _handle = center.show("Booking confirmed", Level::Success);
        // Let the spawned timer task register its sleep on the paused clock
        tokio::task::yield_now().await;

        assert_eq!(center.active().len(), 1);

        tokio::time::advance(Duration::from_millis(DISMISS_AFTER_MS - 1)).await;
        assert_eq!(center.active().len(), 1);

        tokio::time::advance(Duration::from_millis(2)).await;
        // Let the spawned timer task run
        tokio::task::yield_now().await;
        assert!(center.active().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_error_level_selects_error_color() {
        let center = NotificationCenter::new();
        let _handle = center.show("Payment failed", Level::Error);

        let active = center.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].level.color(), "#ef4444");
        assert_eq!(active[0].message, "Payment failed");
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_removes_early_and_cancels_timer() {
        let center = NotificationCenter::new();
        let handle = center.show("Seat held", Level::Info);
        let _other = center.show("Also here", Level::Info);
        // Let the spawned timer tasks register their sleeps on the paused clock
        tokio::task::yield_now().await;

        handle.dismiss();
        assert_eq!(center.active().len(), 1);

        // The aborted timer must not fire later
        tokio::time::advance(Duration::from_millis(DISMISS_AFTER_MS + 10)).await;
        tokio::task::yield_now().await;
        assert!(center.active().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_notifications_coexist() {
        let center = NotificationCenter::new();
        let a = center.show("one", Level::Info);
        let b = center.show("two", Level::Success);

        assert_ne!(a.id(), b.id());
        assert_eq!(center.active().len(), 2);
    }

    #[test]
    fn test_default_level_is_info() {
        assert_eq!(Level::default(), Level::Info);
        assert_eq!(Level::default().color(), "#3b82f6");
    }
}
