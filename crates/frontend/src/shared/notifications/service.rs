use super::{Notification, NotificationQueue, Severity, Toast, NOTIFICATION_LIFETIME_MS};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Сервис всплывающих уведомлений, общий для всех страниц
#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<NotificationQueue>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::new()),
        }
    }

    /// Показать уведомление и закрыть его по таймеру
    pub fn push(&self, notification: Notification) {
        match notification.severity {
            Severity::Success => log::info!("{}", notification.detail),
            Severity::Error => log::warn!("{}", notification.detail),
        }

        let Some(id) = self.queue.try_update(|q| q.push(notification)) else {
            return;
        };

        let queue = self.queue;
        spawn_local(async move {
            TimeoutFuture::new(NOTIFICATION_LIFETIME_MS).await;
            queue.try_update(|q| q.dismiss(id));
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }

    /// Текущие уведомления (реактивно)
    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|q| q.toasts().to_vec())
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}
