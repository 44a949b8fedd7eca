//! Book search client implementation.
//!
//! This module provides the main client for interacting with the search
//! engine. Application code uses this to index, delete, count and search book
//! records.

use tracing::{debug, info, instrument};

use book_search_shared::{EngineResponse, IndexedDocument, SearchIntent};

use crate::config::ClientConfig;
use crate::decoder::{decode_count, decode_search_response, hit_ids};
use crate::endpoint::{Endpoint, Operation};
use crate::errors::SearchError;
use crate::interfaces::{EngineRequest, EngineTransport};
use crate::opensearch::{build_search_query, OpenSearchTransport};
use crate::outcome::classify;

/// The main client for interacting with the search engine.
///
/// Every operation is a single HTTP exchange: no retries, no caching and no
/// state shared between calls, so one client can serve concurrent callers.
pub struct BookSearchClient {
    transport: Box<dyn EngineTransport>,
    config: ClientConfig,
}

impl BookSearchClient {
    /// Create a client talking to the configured host over OpenSearch's transport.
    pub fn new(config: ClientConfig) -> Result<Self, SearchError> {
        let transport = OpenSearchTransport::new(&config)?;
        Ok(Self::with_transport(config, Box::new(transport)))
    }

    /// Create a client over a custom transport.
    pub fn with_transport(config: ClientConfig, transport: Box<dyn EngineTransport>) -> Self {
        info!(
            host = %config.host(),
            collection = %config.collection(),
            kind = %config.kind(),
            "Created book search client"
        );
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a request and classify the reply, returning the body on success.
    async fn execute(&self, request: EngineRequest) -> Result<String, SearchError> {
        let reply = self.transport.send(request).await?;
        Ok(classify(reply)?)
    }

    /// Check that the engine is reachable.
    #[instrument(skip(self))]
    pub async fn ping(&self) -> Result<(), SearchError> {
        self.execute(EngineRequest::get(Endpoint::root(&self.config)))
            .await?;
        debug!("Engine reachable");
        Ok(())
    }

    /// Check that the configured collection exists.
    #[instrument(skip(self), fields(collection = %self.config.collection()))]
    pub async fn check_collection(&self) -> Result<(), SearchError> {
        self.execute(EngineRequest::get(Endpoint::collection(&self.config)))
            .await?;
        debug!("Collection exists");
        Ok(())
    }

    /// Index a book, replacing any entry with the same id.
    #[instrument(skip(self, document), fields(id = document.id))]
    pub async fn build_index_entry(&self, document: &IndexedDocument) -> Result<(), SearchError> {
        let body = serde_json::to_value(document)
            .map_err(|e| SearchError::serialization(e.to_string()))?;

        self.execute(EngineRequest::put(
            Endpoint::document(&self.config, document.id),
            body,
        ))
        .await?;

        debug!("Index entry written");
        Ok(())
    }

    /// Remove a book from the index.
    ///
    /// Engine rejections, including 404 for a missing entry, are reported as
    /// `SearchError::DeleteFailed`.
    #[instrument(skip(self))]
    pub async fn delete_index_entry(&self, id: i64) -> Result<(), SearchError> {
        self.execute(EngineRequest::delete(Endpoint::document(&self.config, id)))
            .await
            .map_err(|e| match e {
                SearchError::Operation(err) => SearchError::DeleteFailed(err),
                other => other,
            })?;

        debug!("Index entry deleted");
        Ok(())
    }

    /// Count the books of the configured kind.
    #[instrument(skip(self))]
    pub async fn count(&self) -> Result<u64, SearchError> {
        let body = self
            .execute(EngineRequest::get(Endpoint::operation(
                &self.config,
                Operation::Count,
            )))
            .await?;

        let result = decode_count(&body)?;
        debug!(count = result.count, "Counted index entries");
        Ok(result.count)
    }

    /// Run a search and return the fully decoded response.
    #[instrument(skip(self, intent), fields(mode = ?intent.mode, size = intent.page_size, page = intent.page_number))]
    pub async fn search_hits(&self, intent: &SearchIntent) -> Result<EngineResponse, SearchError> {
        let query = build_search_query(intent);

        let body = self
            .execute(EngineRequest::post(
                Endpoint::operation(&self.config, Operation::Search),
                query,
            ))
            .await?;

        let response = decode_search_response(&body)?;
        debug!(
            hits = response.hits.hits.len(),
            took_ms = response.took_millis,
            "Search completed"
        );
        Ok(response)
    }

    /// Search book descriptions and names, returning matching ids in ranking order.
    ///
    /// `page` is 1-based; zero or negative values return the first page.
    pub async fn search_by_fields(
        &self,
        text: &str,
        size: usize,
        page: i64,
    ) -> Result<Vec<String>, SearchError> {
        let response = self
            .search_hits(&SearchIntent::multi_field(text, size, page))
            .await?;
        Ok(hit_ids(&response))
    }

    /// Search the engine's default fields with query-string syntax, returning
    /// matching ids in ranking order.
    pub async fn search_unspecified(
        &self,
        text: &str,
        size: usize,
        page: i64,
    ) -> Result<Vec<String>, SearchError> {
        let response = self
            .search_hits(&SearchIntent::unspecified(text, size, page))
            .await?;
        Ok(hit_ids(&response))
    }
}
