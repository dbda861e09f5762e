//! Error types for backend requests.
//!
//! Every failure mode of an operation (transport, non-success status,
//! body decoding) collapses into one rejection channel; the `Display`
//! rendering is the serialized description surfaced to the state's
//! error message.

use thiserror::Error;

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Request to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status.
    #[error("Request to '{url}' returned {status}: {message}")]
    Status {
        status: u16,
        url: String,
        message: String,
    },

    /// The response body could not be decoded.
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The record carries no identifier, so no item URL can be built.
    #[error("Record has no identifier")]
    MissingId,
}

impl ApiError {
    /// HTTP status carried by the error, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get error type string for logging.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Connection { .. } => "connection_error",
            ApiError::Status { .. } => "status_error",
            ApiError::Decode { .. } => "decode_error",
            ApiError::MissingId => "missing_id",
        }
    }
}
