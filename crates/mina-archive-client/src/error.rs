//! # Client Error Types
//!
//! Error handling for archive node queries. Every failure falls into one of
//! three [`ErrorKind`]s so the tool layer can report it without inspecting
//! individual variants.

use thiserror::Error;

/// Client operation result type
pub type ClientResult<T> = Result<T, ArchiveClientError>;

/// Coarse classification of a client failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input rejected before any network call
    Validation,
    /// Endpoint unreachable or returned a non-success HTTP response
    Transport,
    /// Response received but not usable as a GraphQL result
    Protocol,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation => write!(f, "validation"),
            Self::Transport => write!(f, "transport"),
            Self::Protocol => write!(f, "protocol"),
        }
    }
}

/// Error types for archive node client operations
#[derive(Debug, Error)]
pub enum ArchiveClientError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("GraphQL error: {}", messages.join("; "))]
    GraphQlError { messages: Vec<String> },

    #[error("Invalid response: {field} - {reason}")]
    InvalidResponse { field: String, reason: String },

    #[error("JSON deserialization failed: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl ArchiveClientError {
    /// Create an API error from a non-success HTTP response
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    /// Create an invalid response error for a missing or malformed field
    pub fn invalid_response(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) | Self::ConfigError(_) => ErrorKind::Validation,
            Self::HttpError(_) | Self::ApiError { .. } => ErrorKind::Transport,
            Self::GraphQlError { .. }
            | Self::InvalidResponse { .. }
            | Self::SerializationError(_) => ErrorKind::Protocol,
        }
    }

    #[must_use]
    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }

    #[must_use]
    pub fn is_protocol(&self) -> bool {
        self.kind() == ErrorKind::Protocol
    }
}
