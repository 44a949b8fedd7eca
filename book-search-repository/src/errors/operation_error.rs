//! Engine-rejected operation errors.

use thiserror::Error;

/// The engine answered with a status outside `[200, 300)`.
///
/// Carries everything the engine said so callers can diagnose the failure
/// without parsing a message string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{status_code} {status_text}; {body}")]
pub struct OperationError {
    /// The HTTP status code.
    pub status_code: u16,
    /// The canonical reason phrase for the status, if any.
    pub status_text: String,
    /// The full response body, empty if it could not be read.
    pub body: String,
}

impl OperationError {
    /// Create an operation error.
    pub fn new(status_code: u16, status_text: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status_code,
            status_text: status_text.into(),
            body: body.into(),
        }
    }
}
