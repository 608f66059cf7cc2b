//! Toast notifications
//!
//! A `ToastContext` is provided once at the app root. Any page can raise a
//! toast through it, and `NotificationsContainer` renders the queue in the
//! top-right corner.

use crate::core::{Notification, NotificationItem, NotificationQueue, NotificationType};
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Shared handle to the toast queue
#[derive(Clone, Copy)]
pub struct ToastContext {
    queue: RwSignal<NotificationQueue>,
}

impl ToastContext {
    /// Raise a toast. Returns `None` if the owning scope is gone.
    pub fn notify(&self, notification: Notification) -> Option<u64> {
        self.queue.try_update(|q| q.push(notification))
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }

    /// Reactive snapshot of the visible toasts
    pub fn items(&self) -> Vec<NotificationItem> {
        self.queue.with(NotificationQueue::to_vec)
    }
}

/// Provide the toast context to the component tree
pub fn provide_toast_context() -> ToastContext {
    let ctx = ToastContext {
        queue: RwSignal::new(NotificationQueue::new()),
    };
    provide_context(ctx);
    ctx
}

/// Get the toast context from the component tree
pub fn use_toast_context() -> ToastContext {
    expect_context::<ToastContext>()
}

/// Notifications container component
/// Place this once near the app root
#[component]
pub fn NotificationsContainer() -> impl IntoView {
    let toasts = use_toast_context();

    view! {
        <div
            class="fixed top-4 right-4 z-50 flex flex-col gap-2 w-full max-w-sm"
            role="region"
            aria-live="polite"
            aria-label="Notifications"
        >
            <For
                each=move || toasts.items()
                key=|item| item.id
                children=move |item| view! { <Toast item=item /> }
            />
        </div>
    }
}

/// Single toast card
#[component]
fn Toast(item: NotificationItem) -> impl IntoView {
    let toasts = use_toast_context();
    let id = item.id;
    let notification = item.notification;
    let (is_exiting, _set_is_exiting) = signal(false);

    // Auto-dismiss if specified
    if let Some(_ms) = notification.auto_dismiss_ms {
        #[cfg(feature = "hydrate")]
        {
            use gloo_timers::future::TimeoutFuture;
            use leptos::task::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(_ms).await;
                // The toast may have been closed by hand in the meantime
                if _set_is_exiting.try_set(true).is_some() {
                    return;
                }
                // Wait for exit animation
                TimeoutFuture::new(300).await;
                toasts.queue.try_update(|q| q.dismiss(id));
            });
        }
    }

    let (accent_class, icon_name) = match notification.notification_type {
        NotificationType::Success => ("border-green-500/40 text-green-600", icons::CHECK_CIRCLE),
        NotificationType::Error => ("border-red-500/40 text-red-600", icons::ALERT_CIRCLE),
        NotificationType::Info => ("border-blue-500/40 text-blue-600", icons::INFO),
    };

    let container_class = format!(
        "toast-enter flex items-start gap-3 p-4 rounded-lg border bg-white shadow-lg transition-all duration-300 {}",
        accent_class
    );
    let role = if notification.is_error() { "alert" } else { "status" };

    view! {
        <div
            class=container_class
            role=role
            style=move || if is_exiting.get() { "opacity: 0; transform: translateX(1rem);" } else { "opacity: 1; transform: translateX(0);" }
        >
            <Icon name=icon_name class="w-5 h-5 shrink-0" />
            <div class="flex-1 min-w-0">
                <h4 class="text-sm font-semibold text-gray-900">{notification.title}</h4>
                <p class="text-sm text-gray-600 mt-0.5">{notification.message}</p>
            </div>
            <button
                type="button"
                class="text-gray-400 hover:text-gray-700 transition-colors"
                aria-label="Dismiss notification"
                on:click=move |_| toasts.dismiss(id)
            >
                <Icon name=icons::X class="w-4 h-4" />
            </button>
        </div>
    }
}
