use super::service::use_notifications;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Stack of toasts in the top-right corner
#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || notifications.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let n = toast.notification;
                    view! {
                        <div class=format!("toast {}", n.severity.css_modifier())>
                            <div class="toast__text">
                                <div class="toast__summary">{n.summary}</div>
                                <div class="toast__detail">{n.detail}</div>
                            </div>
                            <button
                                class="button button--icon toast__close"
                                on:click=move |_| notifications.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
