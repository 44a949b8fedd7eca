//! # Book Search Shared
//!
//! Plain data types exchanged between the book search client and its callers:
//! the documents written to the engine, the search intents read from callers,
//! and the decoded shapes of the engine's responses.

mod document;
mod intent;
mod response;

pub use document::IndexedDocument;
pub use intent::{MatchMode, SearchIntent};
pub use response::{BookSource, CountResult, EngineResponse, Hit, Hits, ShardStats, TotalHits};
