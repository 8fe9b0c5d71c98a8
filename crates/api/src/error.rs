//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures infrastructure errors to
//! Sentry before responding to the client. All route handlers return
//! `Result<T, AppError>`, and every error response body is JSON.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::AuthError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// A store operation failed. `message` is the client-facing text.
    #[error("{message}: {source}")]
    Store {
        message: &'static str,
        #[source]
        source: RepositoryError,
    },

    /// The password verifier failed. `message` is the client-facing text.
    #[error("{message}: {source}")]
    Verifier {
        message: &'static str,
        #[source]
        source: AuthError,
    },

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Credentials did not match.
    #[error("Unauthorized")]
    Unauthorized,

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Build a mapper from `RepositoryError` that reports `message` to the client.
    ///
    /// ```rust,ignore
    /// repo.list().await.map_err(AppError::store("Erro ao obter produtos"))?;
    /// ```
    pub fn store(message: &'static str) -> impl FnOnce(RepositoryError) -> Self {
        move |source| Self::Store { message, source }
    }

    /// The HTTP status this error maps to.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Store { .. } | Self::Verifier { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Capture server errors to Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        // Don't expose internal error details to clients
        let body = match self {
            Self::Store { message, .. } | Self::Verifier { message, .. } => {
                json!({ "error": message })
            }
            Self::Unauthorized => json!({ "success": false, "error": "Unauthorized" }),
            Self::NotFound(message) | Self::BadRequest(message) => json!({ "error": message }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "Rejected request body");
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(error = %rejection, "Rejected path parameters");
        Self::BadRequest(rejection.body_text())
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
