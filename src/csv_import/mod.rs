//! The bulk-import flow: a page to pick a CSV file and an endpoint that
//! forwards the upload to the backend importer.

mod import_endpoint;
mod import_page;

pub use import_endpoint::import_transactions;
pub use import_page::get_import_page;
