//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`, while `main`
//! uses `anyhow` for convenient propagation at startup.
//!
//! # Design
//!
//! - [`Error`]: top-level error enum
//! - [`CatalogError`](crate::catalog::CatalogError): provider-side failures.
//!   These are absorbed by the catalog service and never reach a caller.
//! - [`ConfigError`](crate::config::ConfigError): startup configuration
//!
//! Only [`Error::InvalidArgument`] is ever rendered as an HTTP response.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Bad client input. Reported as 400 before any provider call.
    #[error("{0}")]
    InvalidArgument(String),

    /// Startup configuration problem
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Catalog provider error
    #[error("Catalog error: {0}")]
    Catalog(#[from] crate::catalog::CatalogError),
}

impl Error {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// HTTP status this error maps to. Only client-input errors are ever
    /// rendered; anything else reaching a handler is a bug.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            Self::InvalidArgument(msg) => tracing::info!("Rejected request: {}", msg),
            other => tracing::error!("Request failed: {}", other),
        }
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
