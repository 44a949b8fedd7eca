//! OpenSearch query builders.
//!
//! This module turns a `SearchIntent` into the query-DSL body of a `_search`
//! request. Query text is always embedded through the JSON encoder, never
//! spliced into a template.

use serde_json::{json, Value};

use book_search_shared::{MatchMode, SearchIntent};

/// Fields matched by a multi-field search, in order.
const MULTI_MATCH_FIELDS: [&str; 2] = ["description", "book_name"];

/// Source fields returned with every hit.
const SOURCE_FIELDS: [&str; 1] = ["book_id"];

/// Build the query document for a search intent.
///
/// Both modes share the same projection and pagination:
/// - `_source` limited to `book_id`
/// - `size` passed through unchanged
/// - `from` derived from the 1-based page number, see [`normalize_page`]
pub fn build_search_query(intent: &SearchIntent) -> Value {
    let query = match intent.mode {
        MatchMode::MultiFieldMatch => build_multi_match(&intent.query_text),
        MatchMode::UnspecifiedMatch => build_query_string(&intent.query_text),
    };

    json!({
        "query": query,
        "_source": SOURCE_FIELDS,
        "size": intent.page_size,
        "from": normalize_page(intent.page_number)
    })
}

/// Convert a caller's 1-based page number to the engine's 0-based offset.
///
/// Zero and negative page numbers mean the first page.
pub fn normalize_page(page_number: i64) -> u64 {
    if page_number > 0 {
        (page_number - 1) as u64
    } else {
        0
    }
}

/// Match the text against book descriptions and names.
fn build_multi_match(query_text: &str) -> Value {
    json!({
        "multi_match": {
            "query": query_text,
            "fields": MULTI_MATCH_FIELDS
        }
    })
}

/// Match the text against the engine's default fields using query-string syntax.
fn build_query_string(query_text: &str) -> Value {
    json!({
        "query_string": {
            "query": query_text
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_page() {
        assert_eq!(normalize_page(i64::MIN), 0);
        assert_eq!(normalize_page(-3), 0);
        assert_eq!(normalize_page(0), 0);
        assert_eq!(normalize_page(1), 0);
        assert_eq!(normalize_page(2), 1);
        assert_eq!(normalize_page(10), 9);
        assert_eq!(normalize_page(i64::MAX), (i64::MAX - 1) as u64);
    }

    #[test]
    fn test_build_multi_field_query() {
        let query = build_search_query(&SearchIntent::multi_field("java", 10, 1));

        assert_eq!(
            query,
            json!({
                "query": {
                    "multi_match": {
                        "query": "java",
                        "fields": ["description", "book_name"]
                    }
                },
                "_source": ["book_id"],
                "size": 10,
                "from": 0
            })
        );
    }

    #[test]
    fn test_build_unspecified_query() {
        let query = build_search_query(&SearchIntent::unspecified("go AND rust", 5, 3));

        assert_eq!(
            query,
            json!({
                "query": { "query_string": { "query": "go AND rust" } },
                "_source": ["book_id"],
                "size": 5,
                "from": 2
            })
        );
    }

    #[test]
    fn test_negative_page_starts_at_zero() {
        let query = build_search_query(&SearchIntent::unspecified("x", 20, -4));
        assert_eq!(query["from"], 0);
        assert_eq!(query["size"], 20);
    }

    #[test]
    fn test_page_size_is_not_capped() {
        let query = build_search_query(&SearchIntent::multi_field("x", 1_000_000, 0));
        assert_eq!(query["size"], 1_000_000);
    }

    #[test]
    fn test_query_text_with_structural_characters_stays_valid() {
        let text = r#"he said "hi"}, {"size": 1 \ end"#;
        let query = build_search_query(&SearchIntent::multi_field(text, 10, 1));

        let encoded = serde_json::to_string(&query).unwrap();
        let decoded: Value = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded["query"]["multi_match"]["query"], text);
        assert_eq!(decoded["size"], 10);
        assert_eq!(decoded.as_object().unwrap().len(), 4);
    }
}
