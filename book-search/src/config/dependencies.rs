//! Dependency initialization and wiring for the book search client.

use std::env;
use std::time::Duration;
use tracing::info;

use crate::AppError;
use book_search_repository::config::{
    DEFAULT_COLLECTION, DEFAULT_HOST, DEFAULT_KIND, DEFAULT_TIMEOUT,
};
use book_search_repository::{BookSearchClient, ClientConfig};

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The client, already verified to reach the engine.
    pub client: BookSearchClient,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `BOOK_SEARCH_HOST`: engine URL (default: http://localhost:9200/)
    /// - `BOOK_SEARCH_COLLECTION`: collection name (default: docBook)
    /// - `BOOK_SEARCH_KIND`: document kind (default: Book)
    /// - `BOOK_SEARCH_TIMEOUT_SECS`: request timeout in seconds (default: 15)
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(AppError)` - If configuration is invalid or the engine is unreachable
    pub async fn new() -> Result<Self, AppError> {
        let config = client_config_from(|key| env::var(key).ok())?;
        Self::from_config(config).await
    }

    /// Build the client for `config` and verify the engine answers.
    ///
    /// Client construction and ping failures keep their `SearchError`.
    pub async fn from_config(config: ClientConfig) -> Result<Self, AppError> {
        info!(
            host = %config.host(),
            collection = %config.collection(),
            kind = %config.kind(),
            timeout_secs = config.timeout().as_secs(),
            "Initializing dependencies"
        );

        let client = BookSearchClient::new(config)?;

        // Verify the engine is reachable
        client.ping().await?;

        info!("Search engine connection verified");

        Ok(Self { client })
    }
}

/// Build a client config from a variable lookup, falling back to defaults.
pub fn client_config_from<F>(lookup: F) -> Result<ClientConfig, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let host = lookup("BOOK_SEARCH_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
    let collection =
        lookup("BOOK_SEARCH_COLLECTION").unwrap_or_else(|| DEFAULT_COLLECTION.to_string());
    let kind = lookup("BOOK_SEARCH_KIND").unwrap_or_else(|| DEFAULT_KIND.to_string());
    let timeout = match lookup("BOOK_SEARCH_TIMEOUT_SECS") {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|e| AppError::config(format!("Invalid BOOK_SEARCH_TIMEOUT_SECS: {}", e)))?,
        None => DEFAULT_TIMEOUT,
    };

    Ok(ClientConfig::new(host, collection, kind, timeout))
}
