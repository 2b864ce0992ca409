//! Defines the route handler for paths outside the route table.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::html::error_view;

/// Render the 404 page.
pub async fn get_404_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        error_view(
            "Página não encontrada",
            "404",
            "Página não encontrada.",
            "Confira o endereço ou volte para a listagem.",
        ),
    )
        .into_response()
}
