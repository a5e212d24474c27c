//! Error type for request handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Failure while serving a request.
///
/// Rendered as a bare 500 with an empty body; the cause only goes to the log.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Database(e) => tracing::error!(error = %e, "Database error"),
        }

        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
