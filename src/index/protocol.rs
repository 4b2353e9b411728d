//! Search Engine Wire Protocol
//!
//! Endpoint names and the response envelopes exchanged with the
//! Elasticsearch-compatible REST API. Request bodies for `_search` are
//! produced by `SearchQuery::to_request_body`.

use super::store::SearchHit;

use serde::Deserialize;
use serde_json::{Value, json};

// --- API Endpoints ---

/// Query endpoint, relative to the index.
pub const ENDPOINT_SEARCH: &str = "_search";
/// Single-document endpoint, relative to the index. Followed by the document id.
pub const ENDPOINT_DOC: &str = "_doc";
/// Value of the `refresh` parameter that blocks a write until it is searchable.
pub const REFRESH_WAIT_FOR: &str = "wait_for";
/// Error type the engine reports when creating an index that already exists.
pub const INDEX_EXISTS_ERROR: &str = "resource_already_exists_exception";

// --- Data Transfer Objects ---

/// Top level of a `_search` response. Only the hit list is read.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub hits: HitsEnvelope,
}

#[derive(Debug, Deserialize)]
pub struct HitsEnvelope {
    #[serde(default)]
    pub hits: Vec<RawHit>,
}

/// A single hit as the engine sends it.
///
/// `_source` is kept as an untyped value so that one malformed document
/// cannot fail the decoding of the whole response.
#[derive(Debug, Deserialize)]
pub struct RawHit {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_source", default)]
    pub source: Value,
}

impl From<RawHit> for SearchHit {
    fn from(raw: RawHit) -> Self {
        SearchHit::new(raw.id, raw.source)
    }
}

/// Acknowledgement for index and delete calls.
#[derive(Debug, Deserialize)]
pub struct WriteResponse {
    #[serde(rename = "_id")]
    pub id: String,
    /// `created`, `updated`, `deleted` or `not_found`.
    pub result: String,
}

/// Mapping for the `books` index.
///
/// `publisher` and `categories` carry a `keyword` sub-field so that term
/// clauses compare byte-exact values while the text field stays searchable.
pub fn books_mapping() -> Value {
    let text_with_keyword = json!({
        "type": "text",
        "fields": { "keyword": { "type": "keyword", "ignore_above": 256 } }
    });

    json!({
        "mappings": {
            "properties": {
                "id": { "type": "keyword" },
                "name": { "type": "text" },
                "author": text_with_keyword,
                "edition": { "type": "keyword" },
                "publisher": text_with_keyword,
                "release_date": { "type": "date", "format": "yyyy-MM-dd" },
                "description": { "type": "text" },
                "page_count": { "type": "integer" },
                "content": { "type": "text" },
                "categories": text_with_keyword,
                "tags": text_with_keyword,
                "rating": { "type": "float" },
                "review_count": { "type": "integer" }
            }
        }
    })
}
