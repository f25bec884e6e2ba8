//! User-facing notification queue.
//!
//! The platform surfaces short messages to the user through a front-end
//! queue. This module defines the message shape and the sink seam that
//! producers (like the location service) push through: a UI drains
//! [`MessageQueue`], headless runs use [`LogMessageSink`].

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tracing::info;

/// Category of a user notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageCategory {
    /// Informational message.
    #[default]
    Info,
    /// Warning message.
    Warning,
    /// Error message.
    Error,
}

/// Icon shown next to a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageIcon {
    /// Front-end default icon.
    #[default]
    Default,
}

/// A single user-visible notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Message text.
    pub text: String,
    /// Queue priority (1 = low).
    pub priority: u8,
    /// Display duration in UI ticks.
    pub duration_ticks: u32,
    /// Message category.
    pub category: MessageCategory,
    /// Icon to display.
    pub icon: MessageIcon,
}

impl Notification {
    /// Informational notification with the default icon.
    pub fn info(text: impl Into<String>, priority: u8, duration_ticks: u32) -> Self {
        Self {
            text: text.into(),
            priority,
            duration_ticks,
            category: MessageCategory::Info,
            icon: MessageIcon::Default,
        }
    }
}

/// Sink for user notifications.
pub trait MessageSink: Send {
    /// Push one notification.
    fn push(&mut self, notification: Notification);
}

/// Shared drainable queue of notifications for a UI front end.
///
/// Clones share the same underlying queue, so a producer can hold one
/// handle while the front end drains through another.
#[derive(Debug, Clone, Default)]
pub struct MessageQueue {
    queue: Arc<Mutex<VecDeque<Notification>>>,
}

impl MessageQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued notifications.
    pub fn len(&self) -> usize {
        self.queue.lock().expect("message queue lock poisoned").len()
    }

    /// True when nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drain all queued notifications in push order.
    pub fn drain(&self) -> Vec<Notification> {
        self.queue
            .lock()
            .expect("message queue lock poisoned")
            .drain(..)
            .collect()
    }
}

impl MessageSink for MessageQueue {
    fn push(&mut self, notification: Notification) {
        self.queue
            .lock()
            .expect("message queue lock poisoned")
            .push_back(notification);
    }
}

/// Sink that forwards notifications to the log layer.
///
/// Used by headless runs where no front end drains a queue.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMessageSink;

impl MessageSink for LogMessageSink {
    fn push(&mut self, notification: Notification) {
        info!("[user message] {}", notification.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_info_shape() {
        let note = Notification::info("Location is explicitly disabled.", 1, 180);
        assert_eq!(note.text, "Location is explicitly disabled.");
        assert_eq!(note.priority, 1);
        assert_eq!(note.duration_ticks, 180);
        assert_eq!(note.category, MessageCategory::Info);
        assert_eq!(note.icon, MessageIcon::Default);
    }

    #[test]
    fn test_queue_push_and_drain_order() {
        let queue = MessageQueue::new();
        let mut producer = queue.clone();
        assert!(queue.is_empty());

        producer.push(Notification::info("first", 1, 10));
        producer.push(Notification::info("second", 1, 10));
        assert_eq!(queue.len(), 2);

        let drained = queue.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].text, "first");
        assert_eq!(drained[1].text, "second");
        assert!(queue.is_empty());
    }
}
