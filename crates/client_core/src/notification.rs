//! Transient user-facing messages and the tray that expires them.

use std::time::{Duration, Instant};

pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub ttl: Duration,
}

impl Notification {
    pub fn success(message: impl Into<String>, ttl: Duration) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
            ttl,
        }
    }

    pub fn error(message: impl Into<String>, ttl: Duration) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
            ttl,
        }
    }
}

#[derive(Debug, Clone)]
struct ActiveNotification {
    notification: Notification,
    expires_at: Instant,
}

/// Keeps notifications visible until their ttl runs out.
#[derive(Debug, Default)]
pub struct NotificationTray {
    active: Vec<ActiveNotification>,
}

impl NotificationTray {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification, now: Instant) {
        let expires_at = now + notification.ttl;
        self.active.push(ActiveNotification {
            notification,
            expires_at,
        });
    }

    /// Drops expired notifications and returns how many were dismissed.
    pub fn prune(&mut self, now: Instant) -> usize {
        let before = self.active.len();
        self.active.retain(|entry| entry.expires_at > now);
        before - self.active.len()
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> + '_ {
        self.active.iter().map(|entry| &entry.notification)
    }

    /// Time until the next notification is dismissed.
    pub fn next_expiry(&self, now: Instant) -> Option<Duration> {
        self.active
            .iter()
            .map(|entry| entry.expires_at.saturating_duration_since(now))
            .min()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
