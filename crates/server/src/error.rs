//! Error types for the statuswatch server.
//!
//! This module provides custom error types that implement `IntoResponse`
//! for seamless integration with Axum handlers.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use statuswatch_store::StoreError;
use thiserror::Error;

/// Application-level errors for the push API.
#[derive(Error, Debug)]
pub enum AppError {
    /// Bad or missing credentials
    #[error("Invalid authentication credentials")]
    Unauthorized,

    /// Referenced service does not exist
    #[error("Service with ID {0} not found")]
    ServiceNotFound(i64),

    /// Datastore error (lookup or insert)
    #[error("Datastore error: {0}")]
    Store(#[from] StoreError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::ServiceNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Store(e) => {
                tracing::error!(error = %e, "Datastore error");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        let mut response = (status, body).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Basic"));
        }
        response
    }
}

/// Result type alias using AppError.
pub type AppResult<T> = Result<T, AppError>;

impl From<envy::Error> for AppError {
    fn from(err: envy::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
