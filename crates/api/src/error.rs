use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use casting_core::error::CoreError;
use casting_db::StoreError;
use serde_json::json;

use crate::auth::AuthError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`], [`StoreError`] and [`AuthError`] and adds
/// HTTP-specific variants. Implements [`IntoResponse`] to produce the
/// uniform envelope:
///
/// ```json
/// { "success": false, "error": 404, "code": "NOT_FOUND", "message": "..." }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `casting_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An entity store failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Token verification or permission failure.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The request body could not be read or is not JSON.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No route matches the request path.
    #[error("Route not found")]
    RouteNotFound,

    /// The path exists but not for this method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The handler did not finish within the configured request timeout.
    #[error("Request timed out")]
    RequestTimeout,

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Message for every storage failure; driver details stay in the logs.
const UNPROCESSABLE: &str = "unprocessable";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) | AppError::Store(StoreError::Core(core)) => classify_core(core),

            AppError::Store(StoreError::Database(err)) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "UNPROCESSABLE",
                    UNPROCESSABLE.to_string(),
                )
            }

            AppError::Auth(err) => (err.status(), err.code(), err.to_string()),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::RouteNotFound => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "Resource not found".to_string(),
            ),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "METHOD_NOT_ALLOWED",
                "Method not allowed".to_string(),
            ),
            AppError::RequestTimeout => (
                StatusCode::REQUEST_TIMEOUT,
                "REQUEST_TIMEOUT",
                "Request timed out".to_string(),
            ),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "code": code,
            "message": message,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn classify_core(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "VALIDATION_ERROR",
            msg.clone(),
        ),
    }
}

/// A path parameter that does not parse (e.g. `/movies/abc`) names no
/// resource.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Path rejected");
        AppError::RouteNotFound
    }
}
