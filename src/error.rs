use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error;

/// Errors raised by the hosting layer around the routes, converted to HTTP responses.
///
/// The health handler itself never fails; these only cover requests that do not
/// reach it.
#[derive(Debug, Error)]
pub enum AppError {
    /// No route matches the requested path.
    #[error("not found: {0}")]
    NotFound(String),
    /// The path exists but does not accept the requested method.
    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        };

        let payload = Json(ErrorBody {
            message: self.to_string(),
        });

        (status, payload).into_response()
    }
}
