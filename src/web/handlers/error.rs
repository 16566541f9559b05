use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::embedding::EmbeddingError;
use crate::error::SearchError;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Search(SearchError),
}

impl From<SearchError> for AppError {
    fn from(error: SearchError) -> Self {
        AppError::Search(error)
    }
}

fn status_for(error: &SearchError) -> StatusCode {
    match error {
        SearchError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
        SearchError::Embedding(inner) => match inner {
            EmbeddingError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            EmbeddingError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            EmbeddingError::Exhausted { .. } => StatusCode::SERVICE_UNAVAILABLE,
            EmbeddingError::Unauthorized { .. }
            | EmbeddingError::InvalidRequest { .. }
            | EmbeddingError::MalformedResponse { .. } => StatusCode::BAD_GATEWAY,
            EmbeddingError::DimensionMismatch { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        },
        SearchError::Store(_) => StatusCode::UNPROCESSABLE_ENTITY,
        SearchError::DimensionMismatch { .. } | SearchError::TaskJoin(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, category, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "invalid_input", msg),
            AppError::Search(error) => {
                let status = status_for(&error);
                if status.is_server_error() {
                    tracing::error!(error = %error, category = error.category(), "Request failed");
                }
                (status, error.category(), error.to_string())
            }
        };

        let body = Json(serde_json::json!({
            "error": message,
            "category": category,
        }));

        (status, body).into_response()
    }
}
