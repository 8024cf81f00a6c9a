//! Client error types

use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;
use tracing::error;

/// Typed failure for directory operations.
///
/// Carries an HTTP-like status code and a message. Upstream failures keep
/// the upstream's status verbatim; the one locally synthesized business
/// failure ([`DirectoryError::Invalid`]) maps to 400; transport and
/// envelope violations are local defects and map to 500.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Non-success status from the upstream directory service.
    /// Status code and response body are preserved verbatim.
    #[error("upstream error ({status}): {message}")]
    Upstream { status: u16, message: String },

    /// Business-rule failure synthesized locally (400)
    #[error("{0}")]
    Invalid(String),

    /// HTTP transport failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Envelope or JSON shape violation in an upstream response
    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DirectoryError {
    /// Create an Invalid error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// The response status this error maps to.
    ///
    /// An upstream status outside the valid range degrades to 500 rather
    /// than panicking in the response path.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Invalid(_) => StatusCode::BAD_REQUEST,
            Self::Http(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Decode(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message carried to the caller.
    pub fn message(&self) -> String {
        match self {
            Self::Upstream { message, .. } => message.clone(),
            Self::Invalid(message) => message.clone(),
            Self::Http(e) => format!("HTTP error: {e}"),
            Self::Decode(e) => format!("Invalid response: {e}"),
            Self::Internal(message) => message.clone(),
        }
    }
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "Directory request failed");
        }
        (status, self.message()).into_response()
    }
}

/// Result type for directory operations
pub type DirectoryResult<T> = Result<T, DirectoryError>;
