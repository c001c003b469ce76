//! Notification Queue
//!
//! Transient success and error messages. Each notification carries its own
//! id, and expiry removes only that id, so a late timer from an older
//! message never clears a newer one.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// CSS class used when rendering
    pub fn as_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub message: String,
}

/// Active notifications, oldest first
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    next_id: u64,
    active: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: impl Into<String>) -> NotificationId {
        self.push(NotificationKind::Success, message.into())
    }

    pub fn error(&mut self, message: impl Into<String>) -> NotificationId {
        self.push(NotificationKind::Error, message.into())
    }

    fn push(&mut self, kind: NotificationKind, message: String) -> NotificationId {
        self.next_id += 1;
        let id = NotificationId(self.next_id);
        self.active.push(Notification { id, kind, message });
        id
    }

    /// Remove one notification. Returns false if it had already expired.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.active.len();
        self.active.retain(|n| n.id != id);
        self.active.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter()
    }

    pub fn of_kind(&self, kind: NotificationKind) -> impl Iterator<Item = &Notification> {
        self.active.iter().filter(move |n| n.kind == kind)
    }

    /// Most recent message of the given kind
    pub fn latest(&self, kind: NotificationKind) -> Option<&str> {
        self.of_kind(kind).last().map(|n| n.message.as_str())
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
