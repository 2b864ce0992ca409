//! Defines the endpoint for recording a new transaction.

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use serde::Deserialize;

use crate::{AppState, api::ApiClient, endpoints, notification::Notifier};

use super::core::{NewTransaction, TransactionType};

/// The form data for recording a transaction.
#[derive(Debug, Deserialize)]
pub struct TransactionForm {
    /// Text describing the transaction.
    pub title: String,
    /// The amount of money moved, in reais. Non-negative; the direction is
    /// carried by `transaction_type`.
    pub value: f64,
    /// Whether this is income or outcome.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The name of the category to file the transaction under.
    pub category: String,
}

/// The state needed to record a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The client for the finance backend.
    pub api: ApiClient,
    /// The sending half of the notification channel.
    pub notifier: Notifier,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
            notifier: state.notifier.clone(),
        }
    }
}

/// A route handler for recording a new transaction, redirects to the listing
/// on success.
///
/// All business validation happens on the backend; a rejected transaction
/// comes back as a toast, and the form stays on screen for another attempt.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let new_transaction = NewTransaction {
        title: form.title,
        value: form.value,
        transaction_type: form.transaction_type,
        category: form.category,
    };

    match state.api.create(&new_transaction).await {
        Ok(transaction) => {
            tracing::debug!("recorded transaction {}", transaction.id);
            state.notifier.success("Transação cadastrada", "");

            (
                HxRedirect(endpoints::ROOT.to_owned()),
                StatusCode::SEE_OTHER,
            )
                .into_response()
        }
        Err(error) => {
            tracing::error!("could not record the transaction: {error}");
            state
                .notifier
                .error("Erro ao cadastrar transação", "Tente novamente mais tarde");

            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
