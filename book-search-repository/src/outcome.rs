//! HTTP outcome classification.
//!
//! Every client operation passes its reply through [`classify`]; it is the
//! only place that decides whether a call succeeded.

use crate::errors::OperationError;
use crate::interfaces::EngineReply;

/// Whether a status code means success.
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Classify a reply, returning its body on success.
pub fn classify(reply: EngineReply) -> Result<String, OperationError> {
    if is_success(reply.status) {
        Ok(reply.body)
    } else {
        Err(OperationError::new(
            reply.status,
            reply.status_text,
            reply.body,
        ))
    }
}
