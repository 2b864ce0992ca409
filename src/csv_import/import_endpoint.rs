//! Defines the endpoint that forwards a CSV upload to the backend importer.

use axum::{
    extract::{FromRef, Multipart, State, multipart::Field},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{AppState, Error, api::ApiClient, notification::Notifier};

/// The state needed for importing transactions.
#[derive(Debug, Clone)]
pub struct ImportState {
    /// The client for the finance backend.
    pub api: ApiClient,
    /// The sending half of the notification channel.
    pub notifier: Notifier,
}

impl FromRef<AppState> for ImportState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
            notifier: state.notifier.clone(),
        }
    }
}

/// Route handler for importing transactions from a CSV file.
///
/// The backend owns parsing, persistence and categorization; this handler
/// only checks that the upload is a CSV and forwards it. The outcome reaches
/// the user through the notification channel.
pub async fn import_transactions(
    State(state): State<ImportState>,
    mut multipart: Multipart,
) -> Response {
    let field = match multipart.next_field().await {
        Ok(Some(field)) => field,
        Ok(None) => {
            state.notifier.error(
                "Nenhum arquivo enviado",
                "Escolha um arquivo CSV para importar",
            );
            return StatusCode::BAD_REQUEST.into_response();
        }
        Err(error) => {
            tracing::error!("Could not parse multipart form: {error}");
            state
                .notifier
                .error("Erro ao importar transações", "O envio do arquivo falhou");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    let (file_name, contents) = match parse_multipart_field(field).await {
        Ok(file) => file,
        Err(Error::NotCsv) => {
            state.notifier.error(
                "Arquivo inválido",
                "O arquivo precisa estar no formato CSV",
            );
            return StatusCode::BAD_REQUEST.into_response();
        }
        Err(error) => {
            tracing::error!("Could not read the uploaded file: {error}");
            state
                .notifier
                .error("Erro ao importar transações", "O envio do arquivo falhou");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    match state.api.import(&file_name, contents).await {
        Ok(()) => {
            state.notifier.success(
                "Importação concluída",
                "Suas transações já aparecem na listagem",
            );
            StatusCode::OK.into_response()
        }
        Err(error) => {
            tracing::error!("Could not import '{file_name}': {error}");
            state.notifier.error(
                "Erro ao importar transações",
                "Verifique a conexão com a internet",
            );
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn parse_multipart_field(field: Field<'_>) -> Result<(String, Vec<u8>), Error> {
    if field.content_type() != Some("text/csv") {
        return Err(Error::NotCsv);
    }

    let file_name = match field.file_name() {
        Some(file_name) => file_name.to_owned(),
        None => {
            tracing::error!("Could not get file name from multipart form field");
            return Err(Error::MultipartError(
                "Could not get file name from multipart form field".to_owned(),
            ));
        }
    };

    let data = match field.bytes().await {
        Ok(data) => data,
        Err(error) => {
            tracing::error!("Could not read data from multipart form field: {error}");
            return Err(Error::MultipartError(
                "Could not read data from multipart form field.".to_owned(),
            ));
        }
    };

    tracing::debug!("Received file '{}' that is {} bytes", file_name, data.len());

    Ok((file_name, data.to_vec()))
}
