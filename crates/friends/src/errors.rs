use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A query parameter that failed string conversion. The payload is the
    /// parameter name as the client spelled it.
    #[error("{0} format error")]
    ParamFormat(String),

    #[error("Not implemented")]
    NotImplemented,

    #[error("Not found")]
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Validation and stub responses are plain text; existing clients
            // match on the exact body.
            AppError::ParamFormat(field) => {
                (StatusCode::BAD_REQUEST, format!("{field} format error")).into_response()
            }
            AppError::NotImplemented => {
                (StatusCode::BAD_REQUEST, "Not implemented").into_response()
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
            AppError::Database(e) => {
                error!("Database error: {e}");
                let body = Json(json!({
                    "error": "Internal server error",
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}
