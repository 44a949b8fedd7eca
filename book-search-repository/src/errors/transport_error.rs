//! Transport error types.

use thiserror::Error;

/// The HTTP call could not be completed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request could not be sent or its response could not be read.
    #[error("Request error: {0}")]
    Request(String),

    /// The configured timeout elapsed before the engine answered.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// A caller-supplied deadline expired and the call was abandoned.
    #[error("Request cancelled")]
    Cancelled,
}

impl TransportError {
    /// Create a request error.
    pub fn request(msg: impl Into<String>) -> Self {
        Self::Request(msg.into())
    }

    /// Create a timeout error.
    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }
}
