//! Defines the endpoint for deleting a transaction.

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::html;

use crate::{AppState, api::ApiClient, notification::Notifier};

use super::list_model::delete_and_notify;

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    /// The client for the finance backend.
    pub api: ApiClient,
    /// The sending half of the notification channel.
    pub notifier: Notifier,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
            notifier: state.notifier.clone(),
        }
    }
}

/// A route handler for deleting a transaction.
///
/// The outcome reaches the user through the notification channel either way.
/// On success the response is an empty fragment: the status code has to be
/// 200 OK or HTMX will not swap away the table row. On failure the error
/// status stops HTMX from touching the row, so the listing keeps showing it.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Path(transaction_id): Path<String>,
) -> Response {
    match delete_and_notify(&transaction_id, &state.api, &state.notifier).await {
        Ok(()) => html! {}.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
