//! Transient notifications (toasts)
//!
//! - `NotificationQueue`: plain ordered queue, no reactivity
//! - `NotificationService`: context service with auto-dismiss
//! - `NotificationHost`: renders the stack

mod host;
mod service;

pub use host::NotificationHost;
pub use service::{use_notifications, NotificationService};

/// How long a toast stays on screen
pub const NOTIFICATION_LIFETIME_MS: u32 = 3_000;

/// Toasts beyond this count push the oldest out
pub const MAX_VISIBLE_NOTIFICATIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn css_modifier(&self) -> &'static str {
        match self {
            Severity::Success => "toast--success",
            Severity::Error => "toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
}

impl Notification {
    pub fn success(detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            summary: "Success".to_string(),
            detail: detail.into(),
        }
    }

    pub fn error(detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            summary: "Error".to_string(),
            detail: detail.into(),
        }
    }
}

/// Notification with the id it was shown under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notification and return its id
    pub fn push(&mut self, notification: Notification) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, notification });
        if self.toasts.len() > MAX_VISIBLE_NOTIFICATIONS {
            let overflow = self.toasts.len() - MAX_VISIBLE_NOTIFICATIONS;
            self.toasts.drain(..overflow);
        }
        id
    }

    /// Remove a toast; unknown ids are ignored
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
