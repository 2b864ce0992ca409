//! Defines the core data models exchanged with the finance backend.
//!
//! These mirror the backend's JSON wire format. The backend owns the
//! lifecycle of both entities; the UI only reads them and requests
//! deletions.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Whether a transaction brought money in or moved money out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in, e.g. a salary deposit.
    Income,
    /// Money going out, e.g. a rent payment.
    Outcome,
}

/// The category a transaction was filed under, e.g. "Alimentação".
///
/// Categorization happens on the backend; the UI never edits this.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    /// The display name of the category.
    pub title: String,
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// IDs are assigned by the backend and are opaque strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    /// The backend-assigned unique ID of the transaction.
    pub id: String,
    /// A text description of what the transaction was for.
    pub title: String,
    /// The amount of money moved, always non-negative; the direction is
    /// carried by `transaction_type`.
    pub value: f64,
    /// Whether this was income or outcome.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The category the backend filed this transaction under.
    pub category: Category,
    /// When the transaction was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// The aggregate balance over all transactions currently known to the
/// backend.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Balance {
    /// Total of all income transactions.
    pub income: f64,
    /// Total of all outcome transactions.
    pub outcome: f64,
    /// `income - outcome`.
    pub total: f64,
}

/// The payload of the backend's transaction listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionData {
    /// The transactions in the order the backend returned them.
    pub transactions: Vec<Transaction>,
    /// The aggregate balance, taken at the same instant as the listing.
    pub balance: Balance,
}

/// The request body for recording a new transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTransaction {
    /// A text description of what the transaction is for.
    pub title: String,
    /// The amount of money moved, non-negative.
    pub value: f64,
    /// Whether this is income or outcome.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The name of the category to file the transaction under. The backend
    /// creates the category if it does not exist yet.
    pub category: String,
}

#[cfg(test)]
mod wire_format_tests {
    use time::macros::datetime;

    use super::{NewTransaction, TransactionData, TransactionType};

    #[test]
    fn parses_listing_payload() {
        let body = r#"{
            "transactions": [
                {
                    "id": "0b2bc2c2-5d39-4b5c-b0d7-186f1bd2b3b4",
                    "title": "Salário",
                    "value": 4000.0,
                    "type": "income",
                    "category": { "title": "Trabalho" },
                    "created_at": "2021-04-05T10:30:00Z"
                },
                {
                    "id": "5f59a085-e65d-4f96-8a29-6a89c2a0dfcf",
                    "title": "Aluguel",
                    "value": 1200.5,
                    "type": "outcome",
                    "category": { "title": "Moradia" },
                    "created_at": "2021-04-06T08:00:00Z"
                }
            ],
            "balance": { "income": 4000.0, "outcome": 1200.5, "total": 2799.5 }
        }"#;

        let data: TransactionData = serde_json::from_str(body).expect("Could not parse payload");

        assert_eq!(data.transactions.len(), 2);

        let salary = &data.transactions[0];
        assert_eq!(salary.title, "Salário");
        assert_eq!(salary.transaction_type, TransactionType::Income);
        assert_eq!(salary.category.title, "Trabalho");
        assert_eq!(salary.created_at, datetime!(2021-04-05 10:30 UTC));

        let rent = &data.transactions[1];
        assert_eq!(rent.transaction_type, TransactionType::Outcome);
        assert_eq!(rent.value, 1200.5);

        assert_eq!(data.balance.total, 2799.5);
    }

    #[test]
    fn rejects_unknown_transaction_type() {
        let body = r#"{
            "id": "1",
            "title": "x",
            "value": 1.0,
            "type": "transfer",
            "category": { "title": "x" },
            "created_at": "2021-04-05T10:30:00Z"
        }"#;

        let result = serde_json::from_str::<super::Transaction>(body);

        assert!(result.is_err());
    }

    #[test]
    fn serializes_new_transaction_with_lowercase_type() {
        let new_transaction = NewTransaction {
            title: "Mercado".to_owned(),
            value: 250.0,
            transaction_type: TransactionType::Outcome,
            category: "Alimentação".to_owned(),
        };

        let body = serde_json::to_value(&new_transaction).expect("Could not serialize");

        assert_eq!(body["type"], "outcome");
        assert_eq!(body["title"], "Mercado");
        assert_eq!(body["category"], "Alimentação");
    }
}
