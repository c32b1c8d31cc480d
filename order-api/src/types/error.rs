//! Error handling for the order handlers

use lambda_http::http::StatusCode;
use lambda_http::{Body, Response};
use order_storage::order::OrderStorageError;
use thiserror::Error;

use super::{json_response, ErrorBody};

/// Category of a handler failure, each surfaced with its own status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Request body missing, malformed or failing field validation
    Validation,
    /// Addressed order does not exist
    NotFound,
    /// Order store rejected the operation or could not be reached
    StoreUnavailable,
}

impl ErrorKind {
    /// HTTP status returned for this kind
    #[must_use]
    pub const fn status(self) -> StatusCode {
        match self {
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::StoreUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Application error carrying its kind and a message with the underlying cause
#[derive(Debug, Error)]
#[error("{message}")]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    /// Create a new application error
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Create a validation error
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Prefixes the message with the operation that failed
    #[must_use]
    pub fn context(self, context: &str) -> Self {
        Self {
            kind: self.kind,
            message: format!("{context}: {}", self.message),
        }
    }

    /// Kind of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// HTTP status of this error
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.kind.status()
    }

    /// Converts into the `{ "error": .. }` envelope, logging by status class
    #[must_use]
    pub fn into_response(self) -> Response<Body> {
        let status = self.status();
        match status.as_u16() {
            400..=499 => tracing::warn!("Client error: {status} - {}", self.message),
            500..=599 => tracing::error!("Server error: {status} - {}", self.message),
            _ => {}
        }

        json_response(
            status,
            &ErrorBody {
                error: self.message,
            },
        )
    }
}

/// Convert order storage errors to application errors
impl From<OrderStorageError> for AppError {
    fn from(err: OrderStorageError) -> Self {
        let kind = match &err {
            OrderStorageError::OrderNotFound { .. } => ErrorKind::NotFound,
            _ => ErrorKind::StoreUnavailable,
        };

        Self::new(kind, err.to_string())
    }
}
