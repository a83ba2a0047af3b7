//! In-memory user notifications (toasts plus the notification center list).
//!
//! Not persisted: a reload starts empty.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

/// Cap on retained notifications; the oldest are dropped first.
pub const MAX_NOTIFICATIONS: usize = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub read: bool,
    /// Creation time in milliseconds since the Unix epoch.
    pub timestamp: f64,
}

/// Newest-first notification list.
#[derive(Clone, Debug, Default)]
pub struct NotificationState {
    pub items: Vec<Notification>,
}

impl NotificationState {
    /// Add a notification and return its id.
    pub fn push(
        &mut self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        timestamp: f64,
    ) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.items.insert(
            0,
            Notification { id: id.clone(), kind, title: title.into(), message: message.into(), read: false, timestamp },
        );
        self.items.truncate(MAX_NOTIFICATIONS);
        id
    }

    pub fn mark_read(&mut self, id: &str) {
        if let Some(item) = self.items.iter_mut().find(|n| n.id == id) {
            item.read = true;
        }
    }

    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.read = true;
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.items.retain(|n| n.id != id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Unread notifications newer than `since`, for transient toasts.
    pub fn recent_unread(&self, since: f64) -> impl Iterator<Item = &Notification> {
        self.items.iter().filter(move |n| !n.read && n.timestamp >= since)
    }
}
