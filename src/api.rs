//! A thin HTTP client for the external finance backend.
//!
//! The backend owns persistence, balance computation and categorization;
//! this client only moves requests and JSON across the wire. There are no
//! retries: a single failed attempt surfaces immediately to the caller as
//! [Error::Network].

use reqwest::multipart;

use crate::{
    Error,
    transaction::{NewTransaction, Transaction, TransactionData},
};

/// A client for the finance backend, bound to a fixed base URL.
///
/// Cheap to clone; the underlying connection pool is shared between clones.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against `base_url`, e.g. `http://localhost:3333`.
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Fetch all transactions and the aggregate balance.
    ///
    /// # Errors
    /// Returns [Error::Network] if the backend is unreachable, answers with
    /// a non-2xx status, or returns a body that is not a valid listing.
    pub async fn list(&self) -> Result<TransactionData, Error> {
        let response = self
            .http
            .get(self.url("/transactions"))
            .send()
            .await?
            .error_for_status()?;

        let data = response.json().await?;

        Ok(data)
    }

    /// Record a new transaction on the backend.
    ///
    /// # Errors
    /// Returns [Error::Network] on connectivity, status, or parse failures.
    pub async fn create(&self, new_transaction: &NewTransaction) -> Result<Transaction, Error> {
        let response = self
            .http
            .post(self.url("/transactions"))
            .json(new_transaction)
            .send()
            .await?
            .error_for_status()?;

        let transaction = response.json().await?;

        Ok(transaction)
    }

    /// Delete the transaction with the given backend-assigned `id`.
    ///
    /// The backend reports nothing beyond the HTTP status, so success does
    /// not confirm which row, if any, was removed.
    ///
    /// # Errors
    /// Returns [Error::Network] on connectivity or status failures.
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        self.http
            .delete(self.url(&format!("/transactions/{id}")))
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }

    /// Upload a CSV file for the backend to import.
    ///
    /// # Errors
    /// Returns [Error::Network] on connectivity or status failures.
    pub async fn import(&self, file_name: &str, contents: Vec<u8>) -> Result<(), Error> {
        let part = multipart::Part::bytes(contents)
            .file_name(file_name.to_owned())
            .mime_str("text/csv")?;
        let form = multipart::Form::new().part("file", part);

        self.http
            .post(self.url("/transactions/import"))
            .multipart(form)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
