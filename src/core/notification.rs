//! Toast notification model
//!
//! Plain data describing the toasts raised by the entry screens, plus a
//! bounded queue that the UI layer wraps in a signal.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum number of notifications to show at once
pub const MAX_NOTIFICATIONS: usize = 5;

/// Notification type, drives the toast colour and icon
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationType {
    Success,
    Error,
    Info,
}

/// A single toast
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub auto_dismiss_ms: Option<u32>,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            notification_type: NotificationType::Success,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(3000),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            notification_type: NotificationType::Error,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(5000),
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            notification_type: NotificationType::Info,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(3000),
        }
    }

    pub fn is_error(&self) -> bool {
        self.notification_type == NotificationType::Error
    }
}

/// Notification item with unique ID for tracking
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationItem {
    pub id: u64,
    pub notification: Notification,
}

/// FIFO of visible toasts, capped at [`MAX_NOTIFICATIONS`]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationQueue {
    items: VecDeque<NotificationItem>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notification and return its id.
    ///
    /// The oldest toast is dropped once the queue grows past the cap.
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.items.push_back(NotificationItem { id, notification });
        while self.items.len() > MAX_NOTIFICATIONS {
            self.items.pop_front();
        }

        id
    }

    /// Remove a notification; returns false if it was already gone
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Snapshot of the queue in display order (oldest first)
    pub fn to_vec(&self) -> Vec<NotificationItem> {
        self.items.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_type_and_dismiss_delay() {
        let success = Notification::success("Saved", "All good");
        assert_eq!(success.notification_type, NotificationType::Success);
        assert_eq!(success.auto_dismiss_ms, Some(3000));

        let error = Notification::error("Error", "Please fill in all fields");
        assert!(error.is_error());
        assert_eq!(error.auto_dismiss_ms, Some(5000));

        let info = Notification::info("Heads up", "Something happened");
        assert_eq!(info.notification_type, NotificationType::Info);
        assert_eq!(info.title, "Heads up");
        assert_eq!(info.message, "Something happened");
    }

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = NotificationQueue::new();
        let a = queue.push(Notification::info("a", ""));
        let b = queue.push(Notification::info("b", ""));
        let c = queue.push(Notification::info("c", ""));

        assert!(a < b && b < c);
        let ids: Vec<_> = queue.to_vec().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![a, b, c]);
    }

    #[test]
    fn test_queue_is_capped_and_drops_oldest() {
        let mut queue = NotificationQueue::new();
        for i in 0..(MAX_NOTIFICATIONS + 3) {
            queue.push(Notification::info(format!("n{}", i), ""));
        }

        let titles: Vec<_> = queue
            .to_vec()
            .into_iter()
            .map(|i| i.notification.title)
            .collect();
        assert_eq!(titles.len(), MAX_NOTIFICATIONS);
        assert_eq!(titles.first().map(String::as_str), Some("n3"));
        assert_eq!(titles.last().map(String::as_str), Some("n7"));
    }

    #[test]
    fn test_ids_stay_unique_after_eviction() {
        let mut queue = NotificationQueue::new();
        for _ in 0..20 {
            queue.push(Notification::info("x", ""));
        }

        let mut ids: Vec<_> = queue.to_vec().iter().map(|i| i.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), MAX_NOTIFICATIONS);
        assert_eq!(ids, vec![15, 16, 17, 18, 19]);
    }

    #[test]
    fn test_dismiss() {
        let mut queue = NotificationQueue::new();
        let first = queue.push(Notification::info("first", ""));
        let second = queue.push(Notification::info("second", ""));

        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));
        let left: Vec<_> = queue.to_vec().iter().map(|i| i.id).collect();
        assert_eq!(left, vec![second]);
    }
}
