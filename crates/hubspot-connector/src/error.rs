//! Error types for the HubSpot connector.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Detail used when HubSpot returns an error body without a `message`.
pub const CONTACTS_FALLBACK_MESSAGE: &str = "Failed to fetch HubSpot contacts";

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Invalid endpoint URL in configuration
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Non-success status from HubSpot
    #[error("HubSpot returned {status}: {message}")]
    Upstream {
        /// HTTP status code
        status: u16,
        /// Message from the response body
        message: String,
    },
}

impl ClientError {
    /// Create an upstream error.
    #[must_use]
    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self::Upstream { status, message: message.into() }
    }
}

/// Errors from the key-value store.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// Redis command or connection failure
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),
}

/// Errors surfaced by the connector's operations.
#[derive(thiserror::Error, Debug)]
pub enum IntegrationError {
    /// Malformed or mismatched OAuth state, malformed credentials, rejected code
    #[error("{0}")]
    BadRequest(String),

    /// No credential stored for the identity pair
    #[error("{0}")]
    NotFound(String),

    /// HubSpot answered with a non-success status
    #[error("{message}")]
    Upstream {
        /// HTTP status code from HubSpot
        status: u16,
        /// Message from HubSpot, passed through unchanged
        message: String,
    },

    /// Any other unexpected failure
    #[error("{0}")]
    Internal(String),

    /// Key-value store failure
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl IntegrationError {
    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create an upstream error.
    #[must_use]
    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self::Upstream { status, message: message.into() }
    }

    /// Create an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status used when this error is returned from a handler.
    ///
    /// A missing credential is reported as 400, matching what callers of the
    /// credential endpoint already expect.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::NotFound(_) => StatusCode::BAD_REQUEST,
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::Internal(_) | Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ClientError> for IntegrationError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Upstream { status, message } => Self::Upstream { status, message },
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for IntegrationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        (status, Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type alias for connector operations.
pub type IntegrationResult<T> = Result<T, IntegrationError>;
