//! The process-wide notification channel for transient success and error
//! messages.
//!
//! Any component may enqueue a toast through a [Notifier]; the single
//! subscriber is the notification renderer, which drains the [ToastQueue]
//! through the notifications endpoint polled by the alert container on every
//! page. Sends are fire-and-forget: there is no acknowledgement, and a toast
//! published after the subscriber is gone is silently dropped.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::AppState;

/// Toast message types for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// The operation completed.
    Success,
    /// The operation failed.
    Error,
}

/// A transient message to be shown to the user once.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    /// Whether this is a success or an error message.
    pub kind: ToastKind,
    /// The short headline of the toast.
    pub title: String,
    /// Supporting detail, possibly empty.
    pub description: String,
}

/// The sending half of the notification channel.
///
/// Cheap to clone; every component that wants to notify the user holds one.
#[derive(Debug, Clone)]
pub struct Notifier {
    sender: UnboundedSender<Toast>,
}

/// The receiving half of the notification channel.
///
/// There is exactly one logical subscriber (the notification renderer); the
/// mutex only serializes concurrent polls of the notifications endpoint.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    receiver: Arc<Mutex<UnboundedReceiver<Toast>>>,
}

/// Create the notification channel.
///
/// Called once at app start; both halves live until app teardown.
pub fn channel() -> (Notifier, ToastQueue) {
    let (sender, receiver) = mpsc::unbounded_channel();

    (
        Notifier { sender },
        ToastQueue {
            receiver: Arc::new(Mutex::new(receiver)),
        },
    )
}

impl Notifier {
    /// Enqueue a success toast.
    pub fn success(&self, title: &str, description: &str) {
        self.notify(Toast {
            kind: ToastKind::Success,
            title: title.to_owned(),
            description: description.to_owned(),
        });
    }

    /// Enqueue an error toast.
    pub fn error(&self, title: &str, description: &str) {
        self.notify(Toast {
            kind: ToastKind::Error,
            title: title.to_owned(),
            description: description.to_owned(),
        });
    }

    fn notify(&self, toast: Toast) {
        if self.sender.send(toast).is_err() {
            // The renderer is gone, which only happens during teardown.
            tracing::debug!("dropped a toast: the notification queue is closed");
        }
    }
}

impl ToastQueue {
    /// Remove and return all pending toasts, oldest first.
    pub fn drain(&self) -> Vec<Toast> {
        let mut receiver = match self.receiver.lock() {
            Ok(receiver) => receiver,
            Err(error) => {
                tracing::error!("could not acquire the notification queue lock: {error}");
                return Vec::new();
            }
        };

        let mut toasts = Vec::new();
        while let Ok(toast) = receiver.try_recv() {
            toasts.push(toast);
        }

        toasts
    }
}

/// The state needed to render pending notifications.
#[derive(Debug, Clone)]
pub struct NotificationState {
    /// The queue the alert container drains.
    pub toasts: ToastQueue,
}

impl FromRef<AppState> for NotificationState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            toasts: state.toasts.clone(),
        }
    }
}

/// Route handler that drains the notification queue and renders the pending
/// toasts as dismissible alerts.
///
/// The alert container in the base template polls this endpoint and prepends
/// whatever it returns, so an empty queue must produce an empty body.
pub async fn drain_notifications(State(state): State<NotificationState>) -> Response {
    let toasts = state.toasts.drain();

    let markup = html! {
        @for toast in &toasts {
            (toast_view(toast))
        }
    };

    markup.into_response()
}

fn toast_view(toast: &Toast) -> Markup {
    let color_style = match toast.kind {
        ToastKind::Success => {
            "text-green-800 border-green-300 bg-green-50 \
            dark:text-green-400 dark:border-green-800 dark:bg-gray-800"
        }
        ToastKind::Error => {
            "text-red-800 border-red-300 bg-red-50 \
            dark:text-red-400 dark:border-red-800 dark:bg-gray-800"
        }
    };

    // Alert adapted from https://flowbite.com/docs/components/alerts/
    html! {
        div
            data-toast="true"
            role="alert"
            class={ "flex items-start justify-between gap-3 p-4 mb-2 border rounded-lg shadow " (color_style) }
        {
            div
            {
                p class="font-medium" { (toast.title) }

                @if !toast.description.is_empty() {
                    p class="text-sm" { (toast.description) }
                }
            }

            button
                type="button"
                aria-label="Fechar"
                class="font-bold cursor-pointer"
                onclick="this.closest('[data-toast]').remove()"
            {
                "\u{00d7}"
            }
        }
    }
}
