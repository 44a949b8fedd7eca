//! Search intents as presented by callers.

/// How the query text is matched against stored documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Match the text against the `description` and `book_name` fields.
    MultiFieldMatch,
    /// Match the text against the engine's default fields using its
    /// query-string syntax.
    UnspecifiedMatch,
}

/// A single search request.
///
/// `page_number` is 1-based as callers present it. Zero or negative values
/// mean the first page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchIntent {
    /// The free text to search for.
    pub query_text: String,
    /// Maximum number of hits to return.
    pub page_size: usize,
    /// 1-based page number.
    pub page_number: i64,
    /// How the text is matched.
    pub mode: MatchMode,
}

impl SearchIntent {
    /// Create a multi-field search over book names and descriptions.
    pub fn multi_field(query_text: impl Into<String>, page_size: usize, page_number: i64) -> Self {
        Self {
            query_text: query_text.into(),
            page_size,
            page_number,
            mode: MatchMode::MultiFieldMatch,
        }
    }

    /// Create a query-string search over the engine's default fields.
    pub fn unspecified(query_text: impl Into<String>, page_size: usize, page_number: i64) -> Self {
        Self {
            query_text: query_text.into(),
            page_size,
            page_number,
            mode: MatchMode::UnspecifiedMatch,
        }
    }
}
