//! Cofre is a web UI for tracking your personal finances: it lists your
//! transactions alongside income/outcome/total balances, and lets you record,
//! delete and bulk-import transactions.
//!
//! All business logic (balance computation, persistence, categorization)
//! lives in an external backend service reached over HTTP. This library
//! serves the HTML pages and proxies mutations to that backend.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod api;
mod app_state;
mod csv_import;
mod endpoints;
mod html;
mod navigation;
mod not_found;
mod notification;
mod routing;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use api::ApiClient;
pub use app_state::AppState;
pub use notification::{Notifier, ToastQueue};
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The finance backend could not be reached, answered with a non-2xx
    /// status, or returned a payload that could not be parsed.
    ///
    /// Connectivity problems, server errors and malformed responses are
    /// collapsed into a single variant: the client never retries, and the
    /// user-facing treatment is the same transient notification for all
    /// three.
    #[error("could not reach the finance backend: {0}")]
    Network(String),

    /// The multipart form could not be parsed as a file upload.
    #[error("could not parse multipart form: {0}")]
    MultipartError(String),

    /// The uploaded file is not a CSV.
    #[error("file is not a CSV")]
    NotCsv,
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        let kind = if value.is_connect() || value.is_timeout() {
            "connection failed"
        } else if value.is_status() {
            "unexpected status"
        } else if value.is_decode() {
            "malformed response body"
        } else {
            "request failed"
        };

        Error::Network(format!("{kind}: {value}"))
    }
}
