//! Caller-supplied deadlines.
//!
//! Client operations are plain futures; running one under a deadline drops
//! the outstanding HTTP call when the deadline passes.

use std::future::Future;

use tokio::time::{timeout_at, Instant};

use crate::errors::{SearchError, TransportError};

/// Run a client operation, abandoning it once `deadline` passes.
///
/// # Returns
///
/// * The operation's own result if it finishes in time
/// * `Err(SearchError::Transport(TransportError::Cancelled))` otherwise
///
/// # Example
///
/// ```ignore
/// let deadline = Instant::now() + Duration::from_millis(250);
/// let ids = with_deadline(deadline, client.search_by_fields("java", 10, 1)).await?;
/// ```
pub async fn with_deadline<T, F>(deadline: Instant, operation: F) -> Result<T, SearchError>
where
    F: Future<Output = Result<T, SearchError>>,
{
    match timeout_at(deadline, operation).await {
        Ok(result) => result,
        Err(_) => Err(TransportError::Cancelled.into()),
    }
}
