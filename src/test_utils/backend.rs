//! A stub finance backend for exercising the HTTP client end to end.

use axum::{Json, Router, http::StatusCode, routing::get};
use serde_json::json;

/// Serve `router` on an ephemeral loopback port and return its base URL.
///
/// The server task is dropped with the test runtime; there is no explicit
/// shutdown.
pub(crate) async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind the stub backend");
    let address = listener
        .local_addr()
        .expect("Could not read the stub backend address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("The stub backend crashed");
    });

    format!("http://{address}")
}

/// The canonical listing payload: two transactions and their balance.
pub(crate) fn listing_fixture() -> serde_json::Value {
    json!({
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
    })
}

/// A backend whose listing returns [listing_fixture].
pub(crate) async fn listing_backend() -> String {
    let router = Router::new().route("/transactions", get(|| async { Json(listing_fixture()) }));

    spawn_backend(router).await
}

/// A backend whose listing always fails with a server error.
pub(crate) async fn failing_backend() -> String {
    let router = Router::new().route(
        "/transactions",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );

    spawn_backend(router).await
}
