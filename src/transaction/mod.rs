//! Transaction listing and recording.
//!
//! This module contains everything related to transactions:
//! - The wire-format models exchanged with the finance backend
//! - The list view-model that synchronizes the snapshot shown to the user
//! - Route handlers for the listing page, the creation page, and the
//!   create/delete endpoints

mod core;
mod create_endpoint;
mod create_page;
mod delete_endpoint;
mod list_model;
mod list_page;

pub use core::{NewTransaction, Transaction, TransactionData, TransactionType};
pub use create_endpoint::create_transaction_endpoint;
pub use create_page::get_new_transaction_page;
pub use delete_endpoint::delete_transaction_endpoint;
pub use list_page::get_transaction_list_page;
