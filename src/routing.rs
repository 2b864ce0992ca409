//! Application router configuration: the path-to-page route table.

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    csv_import::{get_import_page, import_transactions},
    endpoints,
    not_found::get_404_not_found,
    notification::drain_notifications,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, get_new_transaction_page,
        get_transaction_list_page,
    },
};

/// Return a router with all the app's routes.
///
/// Three pages (listing, creation, import), their API endpoints, static
/// files, and a 404 fallback for everything else. No guards, no nested
/// routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_transaction_list_page))
        .route(
            endpoints::NEW_TRANSACTION_VIEW,
            get(get_new_transaction_page),
        )
        .route(endpoints::IMPORT_VIEW, get(get_import_page))
        .route(
            endpoints::TRANSACTIONS_API,
            post(create_transaction_endpoint),
        )
        .route(
            endpoints::DELETE_TRANSACTION,
            delete(delete_transaction_endpoint),
        )
        .route(endpoints::IMPORT, post(import_transactions))
        .route(endpoints::NOTIFICATIONS, get(drain_notifications))
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}
