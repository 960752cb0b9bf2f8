//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Identity Errors**: Malformed user id, unknown user or wrong secret
/// - **Resource Errors**: Todo does not exist or belongs to another user
/// - **Validation Errors**: Request body is not usable JSON
/// - **Database Errors**: Any sqlx::Error from database operations
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    ///
    /// Returns HTTP 500. The underlying error is logged, never sent to the client.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The `userId` path segment is not a valid identifier.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Invalid userId format")]
    MalformedIdentity,

    /// No user has this id, or the secret does not match.
    ///
    /// Returns HTTP 401 Unauthorized. Both cases share one message so callers cannot
    /// probe which user ids exist.
    #[error("Unauthorized: Invalid user or secret")]
    Unauthorized,

    /// Requested todo does not exist or doesn't belong to the authenticated user.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Todo not found")]
    TodoNotFound,

    /// Request body is invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was invalid.
    #[error("{0}")]
    InvalidRequest(String),
}

impl AppError {
    /// HTTP status code this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MalformedIdentity | AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::TodoNotFound => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// { "error": "Human-readable error message" }
/// ```
///
/// # Status Code Mapping
///
/// - `MalformedIdentity` → 400 Bad Request
/// - `InvalidRequest` → 400 Bad Request
/// - `Unauthorized` → 401 Unauthorized
/// - `TodoNotFound` → 404 Not Found
/// - `Database` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match self {
            AppError::Database(ref err) => {
                tracing::error!(error = %err, "Database operation failed");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
