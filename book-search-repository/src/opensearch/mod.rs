//! OpenSearch implementation of the engine transport.
//!
//! This module provides the transport backed by the `opensearch` crate and
//! the query-DSL builders for OpenSearch/Elasticsearch-compatible engines.

pub mod queries;
mod transport;

pub use queries::{build_search_query, normalize_page};
pub use transport::OpenSearchTransport;
