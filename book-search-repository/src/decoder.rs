//! Response decoding.
//!
//! Turns the bodies of successful responses into typed results. Decoding
//! failures are protocol violations and are reported as `DecodeError`, never
//! as an empty result.

use serde::de::DeserializeOwned;

use book_search_shared::{CountResult, EngineResponse};

use crate::errors::DecodeError;

/// Decode a JSON body into `T`.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, DecodeError> {
    serde_json::from_str(body).map_err(DecodeError::from)
}

/// Decode the body of a `_search` response.
pub fn decode_search_response(body: &str) -> Result<EngineResponse, DecodeError> {
    decode(body)
}

/// Decode the body of a `_count` response.
pub fn decode_count(body: &str) -> Result<CountResult, DecodeError> {
    decode(body)
}

/// Document identifiers of every hit, in ranking order.
pub fn hit_ids(response: &EngineResponse) -> Vec<String> {
    response.hits.hits.iter().map(|hit| hit.id.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode_hit_ids(body: &str) -> Result<Vec<String>, DecodeError> {
        decode_search_response(body).map(|response| hit_ids(&response))
    }

    fn search_body(ids: &[&str]) -> String {
        let hits: Vec<_> = ids
            .iter()
            .enumerate()
            .map(|(rank, id)| {
                json!({
                    "_index": "docBook",
                    "_type": "Book",
                    "_id": id,
                    "_score": 3.0 - rank as f64,
                    "_source": { "book_id": 1 }
                })
            })
            .collect();

        json!({
            "took": 1,
            "timed_out": false,
            "_shards": { "total": 1, "successful": 1, "skipped": 0, "failed": 0 },
            "hits": { "total": ids.len(), "max_score": 3.0, "hits": hits }
        })
        .to_string()
    }

    #[test]
    fn test_ids_preserve_ranking_order() {
        let ids = decode_hit_ids(&search_body(&["c", "a", "b"])).unwrap();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_no_hits_is_empty_not_error() {
        let ids = decode_hit_ids(&search_body(&[])).unwrap();
        assert!(ids.is_empty());
    }

    #[test]
    fn test_ids_come_from_envelope_not_source() {
        let body = json!({
            "hits": {
                "hits": [{ "_id": "envelope", "_source": { "book_id": 99 } }]
            }
        })
        .to_string();

        assert_eq!(decode_hit_ids(&body).unwrap(), vec!["envelope"]);
    }

    #[test]
    fn test_source_carrying_id_and_book_id_decodes() {
        let body = json!({
            "hits": {
                "hits": [{
                    "_id": "5",
                    "_source": { "id": 5, "book_id": 5, "book_name": "x", "description": "y" }
                }]
            }
        })
        .to_string();

        assert_eq!(decode_hit_ids(&body).unwrap(), vec!["5"]);
    }

    #[test]
    fn test_envelope_id_field_is_ignored() {
        let body = json!({
            "hits": { "hits": [{ "_id": "5", "id": "other", "_source": {} }] }
        })
        .to_string();

        assert_eq!(decode_hit_ids(&body).unwrap(), vec!["5"]);
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        let err = decode_hit_ids("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));

        let err = decode_hit_ids("").unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }

    #[test]
    fn test_missing_hits_is_decode_error() {
        let body = json!({ "took": 1, "timed_out": false }).to_string();

        let err = decode_hit_ids(&body).unwrap_err();
        assert!(matches!(err, DecodeError::Shape(_)));
    }

    #[test]
    fn test_hit_without_id_is_decode_error() {
        let body = json!({ "hits": { "hits": [{ "_score": 1.0 }] } }).to_string();
        assert!(decode_hit_ids(&body).is_err());
    }

    #[test]
    fn test_decode_count() {
        let body = json!({ "count": 42, "_shards": { "total": 1, "successful": 1 } }).to_string();
        assert_eq!(decode_count(&body).unwrap().count, 42);

        assert!(decode_count(r#"{"count":"many"}"#).is_err());
    }
}
