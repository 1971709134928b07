//! Error types for the ARI client.
//!
//! `AriError` is what resource operations return. `EventError` is what the
//! event parser returns; it never involves the network.

use thiserror::Error;

/// Result type for ARI client operations.
pub type Result<T> = std::result::Result<T, AriError>;

/// Errors surfaced by resource operations.
#[derive(Debug, Error)]
pub enum AriError {
    /// The server reported the referenced resource as absent (HTTP 404)
    #[error("not found: {path}: {message}")]
    NotFound { path: String, message: String },

    /// The operation conflicts with server-side state (HTTP 409)
    #[error("conflict: {path}: {message}")]
    Conflict { path: String, message: String },

    /// Any other transport or status failure, passed through unmodified
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error (bad base URL, unparsable timeout)
    #[error("configuration error: {0}")]
    Config(String),

    /// A response body could not be turned into the expected resource
    #[error("payload error: {0}")]
    Payload(#[from] EventError),
}

impl AriError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AriError::NotFound { .. })
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, AriError::Conflict { .. })
    }
}

/// Errors produced while turning an inbound message into an [`Event`](crate::Event).
#[derive(Debug, Error)]
pub enum EventError {
    /// A required field is missing or has the wrong shape for the declared variant
    #[error("malformed {event_type} payload: {reason}")]
    MalformedPayload { event_type: String, reason: String },

    /// The discriminant names no known event variant
    #[error("unknown event type: {0}")]
    UnknownVariant(String),

    /// The message carries no string `type` field
    #[error("message has no event type")]
    MissingDiscriminant,

    /// The message is not valid JSON at all
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl EventError {
    pub(crate) fn malformed(event_type: impl Into<String>, reason: impl ToString) -> Self {
        EventError::MalformedPayload {
            event_type: event_type.into(),
            reason: reason.to_string(),
        }
    }
}
