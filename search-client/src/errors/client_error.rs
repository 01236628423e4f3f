//! Client error type.
//!
//! All service operations return errors as values; none are fatal to the
//! process. The health monitor is the one component that swallows transient
//! errors, substituting "unhealthy" until its deadline.

use elasticsearch::http::StatusCode;
use thiserror::Error;

/// Errors that can occur while talking to the search engine.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// Host unreachable, malformed URL, or transport construction failure.
    #[error("connection error: {0}")]
    Connection(String),

    /// The engine answered with a non-success status.
    #[error("request failed with status {status}: {reason}")]
    RequestFailed { status: u16, reason: String },

    /// The response body could not be parsed into the expected typed result.
    #[error("decode error: {0}")]
    Decode(String),

    /// The decoded response violated a required shape, e.g. a missing
    /// `acknowledged` boolean on an index delete.
    #[error("validation error: {0}")]
    Validation(String),

    /// A request body could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl ClientError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Create a request-failed error from an engine status and reason text.
    pub fn request_failed(status: StatusCode, reason: impl Into<String>) -> Self {
        Self::RequestFailed {
            status: status.as_u16(),
            reason: reason.into(),
        }
    }

    /// Create a decode error.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Engine status code, when the error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Map a transport-level failure (no HTTP response reached us) to a
    /// connection error.
    pub(crate) fn from_transport(err: elasticsearch::Error) -> Self {
        Self::Connection(err.to_string())
    }
}
