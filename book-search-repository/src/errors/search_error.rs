//! Search error types.
//!
//! This module defines the error returned by every public client operation.

use thiserror::Error;

use super::{DecodeError, OperationError, TransportError};

/// Errors that can occur during book search operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The HTTP call could not be completed.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The engine rejected the request.
    #[error("Operation error: {0}")]
    Operation(#[from] OperationError),

    /// The engine rejected a deletion.
    #[error("Failed to delete index entry: {0}")]
    DeleteFailed(OperationError),

    /// The engine accepted the request but its response could not be decoded.
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Failed to serialize a request body.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The client configuration is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SearchError {
    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// The HTTP status of an engine-rejected request.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Operation(err) | Self::DeleteFailed(err) => Some(err.status_code),
            _ => None,
        }
    }

    /// Whether a caller-supplied deadline cut the call short.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Transport(TransportError::Cancelled))
    }
}
