//! Implements a struct that holds the state of the web app.

use crate::{
    api::ApiClient,
    notification::{self, Notifier, ToastQueue},
};

/// The state of the web app.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The client for the finance backend that owns all business logic.
    pub api: ApiClient,
    /// The sending half of the process-wide notification channel.
    pub notifier: Notifier,
    /// The receiving half, drained by the notification renderer.
    pub toasts: ToastQueue,
}

impl AppState {
    /// Create a new [AppState] with a client for the finance backend at
    /// `backend_url`.
    ///
    /// This also creates the process-wide notification channel, which lives
    /// for as long as the returned state.
    pub fn new(backend_url: &str) -> Self {
        let (notifier, toasts) = notification::channel();

        Self {
            api: ApiClient::new(backend_url),
            notifier,
            toasts,
        }
    }
}
