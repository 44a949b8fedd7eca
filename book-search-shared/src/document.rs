//! The document written to and removed from the search engine.

use serde::{Deserialize, Serialize};

/// A book record as stored in the search engine.
///
/// Serialized verbatim as the body of an index write, so the wire field names
/// (`id`, `book_name`, `description`) are part of the engine contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedDocument {
    /// Identifier of the book, also used as the engine document id.
    pub id: i64,
    /// Display name of the book.
    #[serde(rename = "book_name")]
    pub name: String,
    /// Free-text description of the book.
    pub description: String,
}

impl IndexedDocument {
    /// Create a new document.
    pub fn new(id: i64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }
}
