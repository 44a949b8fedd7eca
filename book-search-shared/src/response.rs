//! Decoded shapes of the search engine's count and search responses.

use serde::Deserialize;

/// Per-shard execution statistics reported with every response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ShardStats {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub successful: u32,
    #[serde(default)]
    pub skipped: u32,
    #[serde(default)]
    pub failed: u32,
}

/// Response of a `_count` request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountResult {
    #[serde(rename = "_shards", default)]
    pub shards: ShardStats,
    pub count: u64,
}

/// Total number of matching documents.
///
/// Older engines report a bare number, newer ones an object carrying the
/// value and whether it is exact (`eq`) or a lower bound (`gte`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TotalHits {
    Count(u64),
    Detailed { value: u64, relation: String },
}

impl TotalHits {
    /// The number of matching documents, regardless of representation.
    pub fn value(&self) -> u64 {
        match self {
            Self::Count(value) => *value,
            Self::Detailed { value, .. } => *value,
        }
    }
}

impl Default for TotalHits {
    fn default() -> Self {
        Self::Count(0)
    }
}

/// Stored fields echoed back for a hit.
///
/// Searches project only `book_id`, so every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BookSource {
    #[serde(default)]
    pub book_id: Option<i64>,
    #[serde(default)]
    pub book_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// One matched document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Hit {
    /// Document identifier from the hit envelope.
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_index", default)]
    pub index: String,
    #[serde(rename = "_type", default)]
    pub kind: String,
    /// Relevance score; `null` when the engine does not score (e.g. sorted queries).
    #[serde(rename = "_score", default)]
    pub score: Option<f64>,
    #[serde(rename = "_source", default)]
    pub source: BookSource,
}

/// The hit list of a search response, in ranking order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Hits {
    #[serde(default)]
    pub total: TotalHits,
    #[serde(default)]
    pub max_score: Option<f64>,
    pub hits: Vec<Hit>,
}

/// Response of a `_search` request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EngineResponse {
    #[serde(default)]
    pub timed_out: bool,
    #[serde(rename = "took", default)]
    pub took_millis: u64,
    #[serde(rename = "_shards", default)]
    pub shards: ShardStats,
    pub hits: Hits,
}
