//! The view-model for the transaction list: load, formatting, and
//! delete-with-notify.
//!
//! The model holds the snapshot taken at the last successful load. Nothing
//! ties the snapshot to the backend after a mutation: a delete prunes the
//! affected row but the balance keeps its last loaded value until the next
//! load.

use crate::{
    Error,
    api::ApiClient,
    endpoints,
    html::{format_currency, format_date},
    notification::Notifier,
};

use super::core::{Balance, Transaction, TransactionType};

/// The lifecycle of the transaction list between a load request and render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    /// The listing request has not resolved yet.
    Loading,
    /// The listing arrived and the rows are ready to render.
    Ready,
    /// The listing failed. Renders exactly like an empty list; the failure
    /// itself was reported through the notification channel.
    Failed,
}

/// A transaction prepared for display.
///
/// The formatted fields are derived at load time and never sent back to the
/// backend.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    /// The backend-assigned ID of the transaction.
    pub id: String,
    /// What the transaction was for.
    pub title: String,
    /// The value rendered as currency, e.g. "R$ 1.234,56".
    pub formatted_value: String,
    /// Whether this was income or outcome.
    pub transaction_type: TransactionType,
    /// The name of the category the backend filed this under.
    pub category_title: String,
    /// The creation date rendered as dd/mm/yyyy.
    pub formatted_date: String,
    /// The API path to delete this transaction.
    pub delete_url: String,
}

impl TransactionRow {
    fn new_from_transaction(transaction: Transaction) -> Self {
        Self {
            delete_url: endpoints::format_endpoint(endpoints::DELETE_TRANSACTION, &transaction.id),
            formatted_value: format_currency(transaction.value),
            formatted_date: format_date(transaction.created_at.date()),
            id: transaction.id,
            title: transaction.title,
            transaction_type: transaction.transaction_type,
            category_title: transaction.category.title,
        }
    }
}

/// The aggregate balance rendered as currency strings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BalanceSummary {
    /// Total income, formatted.
    pub income: String,
    /// Total outcome, formatted.
    pub outcome: String,
    /// Overall total, formatted.
    pub total: String,
}

impl BalanceSummary {
    fn new_from_balance(balance: Balance) -> Self {
        Self {
            income: format_currency(balance.income),
            outcome: format_currency(balance.outcome),
            total: format_currency(balance.total),
        }
    }
}

/// The transaction list view-model.
///
/// A fresh model is created for every render of the listing page; there is
/// no way to restart a model, a new render re-fetches.
#[derive(Debug, PartialEq)]
pub struct TransactionList {
    state: ListState,
    rows: Vec<TransactionRow>,
    balance: BalanceSummary,
    active: bool,
}

impl TransactionList {
    /// Create a list that has not loaded yet.
    pub fn new() -> Self {
        Self {
            state: ListState::Loading,
            rows: Vec::new(),
            balance: BalanceSummary::default(),
            active: true,
        }
    }

    /// Fetch the listing from the backend and prepare it for display.
    ///
    /// On success the rows keep the order the backend returned them in. On
    /// failure exactly one error toast is published and the list stays
    /// empty.
    pub async fn load(&mut self, api: &ApiClient, notifier: &Notifier) {
        let result = api.list().await;

        if !self.active {
            // The view is gone; applying the result now would be a lost
            // update on state nobody reads.
            tracing::debug!("discarded a listing that resolved after stop");
            return;
        }

        match result {
            Ok(data) => {
                self.rows = data
                    .transactions
                    .into_iter()
                    .map(TransactionRow::new_from_transaction)
                    .collect();
                self.balance = BalanceSummary::new_from_balance(data.balance);
                self.state = ListState::Ready;
            }
            Err(error) => {
                tracing::error!("could not load transactions: {error}");
                notifier.error(
                    "Erro em carregar as transações",
                    "Verifique a conexão com a internet",
                );
                self.state = ListState::Failed;
            }
        }
    }

    /// Delete the transaction with `id` on the backend.
    ///
    /// Exactly one toast is published regardless of outcome. The row is
    /// pruned from the snapshot only when the backend confirmed the delete;
    /// on failure it stays, and the error toast tells the user why.
    pub async fn delete(&mut self, id: &str, api: &ApiClient, notifier: &Notifier) {
        let result = delete_and_notify(id, api, notifier).await;

        if self.active && result.is_ok() {
            self.rows.retain(|row| row.id != id);
        }
    }

    /// Mark the view as gone. Asynchronous completions that resolve
    /// afterwards are discarded instead of mutating dead state.
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Where the list is in its load lifecycle.
    pub fn state(&self) -> ListState {
        self.state
    }

    /// The rows to display, in backend order.
    pub fn rows(&self) -> &[TransactionRow] {
        &self.rows
    }

    /// The formatted balance cards.
    pub fn balance(&self) -> &BalanceSummary {
        &self.balance
    }
}

/// Ask the backend to delete transaction `id` and publish exactly one toast,
/// success or failure.
pub(crate) async fn delete_and_notify(
    id: &str,
    api: &ApiClient,
    notifier: &Notifier,
) -> Result<(), Error> {
    match api.delete(id).await {
        Ok(()) => {
            notifier.success("Transação deletada", "");
            Ok(())
        }
        Err(error) => {
            tracing::error!("could not delete transaction {id}: {error}");
            notifier.error("Erro ao deletar transação", "Tente novamente mais tarde");
            Err(error)
        }
    }
}
