//! Notification collaborator for user-facing confirmations.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

/// A toast-style message shown to the user after an action succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    /// Creates a new notification.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Receives notifications. Fire-and-forget: nothing is returned to the caller.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Notifier that emits each notification as a tracing event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        tracing::info!(
            title = %notification.title,
            description = %notification.description,
            "notification"
        );
    }
}

/// In-memory notifier that records every notification it receives.
///
/// Clones share the same buffer, so a screen can own one handle while a test
/// inspects another.
#[derive(Debug, Clone, Default)]
pub struct MemoryNotifier {
    sent: Rc<RefCell<Vec<Notification>>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all notifications received so far, oldest first.
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.borrow().clone()
    }

    /// Returns the number of notifications received.
    pub fn count(&self) -> usize {
        self.sent.borrow().len()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notification: Notification) {
        self.sent.borrow_mut().push(notification);
    }
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}
