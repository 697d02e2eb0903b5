//! Toast notifications shown in the corner of the desktop.
//!
//! The queue assigns ids itself so dismissals can never hit a reused id. Only the newest
//! [`MAX_NOTIFICATIONS`] entries are kept.

/// Toasts kept on screen at once; pushing past this drops the oldest.
pub const MAX_NOTIFICATIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    /// Doubles as the toast's glyph key.
    pub fn token(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Request to show a toast; the queue turns it into a [`Notification`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Auto-dismiss delay in milliseconds. `None` keeps the toast until dismissed.
    pub duration_ms: Option<u32>,
}

impl NotificationRequest {
    pub fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            duration_ms: None,
        }
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub duration_ms: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationQueue {
    entries: Vec<Notification>,
    last_id: u64,
}

impl NotificationQueue {
    /// Oldest first.
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, request: NotificationRequest) -> NotificationId {
        self.last_id += 1;
        let id = NotificationId(self.last_id);
        self.entries.push(Notification {
            id,
            kind: request.kind,
            title: request.title,
            message: request.message,
            duration_ms: request.duration_ms,
        });
        if self.entries.len() > MAX_NOTIFICATIONS {
            let overflow = self.entries.len() - MAX_NOTIFICATIONS;
            self.entries.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn info(title: &str) -> NotificationRequest {
        NotificationRequest::new(NotificationKind::Info, title, "")
    }

    #[test]
    fn ids_are_never_reused_after_dismissal() {
        let mut queue = NotificationQueue::default();
        let first = queue.push(info("one"));
        assert!(queue.dismiss(first));

        let second = queue.push(info("two"));

        assert_ne!(first, second);
        assert!(!queue.dismiss(first));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn overflow_drops_the_oldest() {
        let mut queue = NotificationQueue::default();
        for index in 0..MAX_NOTIFICATIONS + 2 {
            queue.push(info(&format!("n{index}")));
        }

        let titles: Vec<&str> = queue.entries().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["n2", "n3", "n4", "n5", "n6"]);
    }

    #[test]
    fn duration_is_carried_through() {
        let mut queue = NotificationQueue::default();
        let id = queue.push(
            NotificationRequest::new(NotificationKind::Warning, "Offline", "no feed")
                .with_duration(4000),
        );

        let entry = &queue.entries()[0];
        assert_eq!(entry.id, id);
        assert_eq!(entry.kind, NotificationKind::Warning);
        assert_eq!(entry.duration_ms, Some(4000));
    }
}
