use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

/// Queue of notifications awaiting acknowledgment
#[derive(Debug, Default)]
pub struct NotificationState {
    pending: VecDeque<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(message.into(), NotificationKind::Success);
    }

    pub fn failure(&mut self, message: impl Into<String>) {
        self.push(message.into(), NotificationKind::Failure);
    }

    fn push(&mut self, message: String, kind: NotificationKind) {
        log::info!("{:?}: {}", kind, message);
        self.pending.push_back(Notification { message, kind });
    }

    /// The notification currently on screen
    pub fn current(&self) -> Option<&Notification> {
        self.pending.front()
    }

    pub fn is_visible(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Acknowledge the visible notification, revealing the next one
    pub fn dismiss(&mut self) -> Option<Notification> {
        self.pending.pop_front()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
