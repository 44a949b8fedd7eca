//! # Book Search Repository
//!
//! This crate provides the client used to index, delete, count and search book
//! records in an OpenSearch/Elasticsearch-compatible engine. It includes the
//! endpoint, query and response handling, the error taxonomy, and a transport
//! implementation built on the OpenSearch client.

pub mod client;
pub mod config;
pub mod deadline;
pub mod decoder;
pub mod endpoint;
pub mod errors;
pub mod interfaces;
pub mod opensearch;
pub mod outcome;

pub use client::BookSearchClient;
pub use config::ClientConfig;
pub use deadline::with_deadline;
pub use errors::{DecodeError, OperationError, SearchError, TransportError};
pub use interfaces::{EngineReply, EngineRequest, EngineTransport, HttpMethod};
pub use crate::opensearch::OpenSearchTransport;
