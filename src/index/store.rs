use crate::books::types::Book;
use crate::error::Result;
use crate::query::builder::SearchQuery;

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Name of the single collection the gateway serves.
pub const BOOKS_INDEX: &str = "books";

/// Number of hits the engine returns when no `size` is requested.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Handle shared by every request handler.
pub type SharedIndex = Arc<dyn BookIndex>;

/// One document returned by the engine: its identifier and raw body.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub id: String,
    pub source: Value,
}

impl SearchHit {
    pub fn new(id: impl Into<String>, source: Value) -> Self {
        Self {
            id: id.into(),
            source,
        }
    }
}

/// Capabilities the gateway needs from the search backend.
///
/// Every call is a single round-trip with no caching and no retry; failures
/// come back as `GatewayError::Backend` carrying the backend's message.
#[async_trait]
pub trait BookIndex: Send + Sync {
    /// Runs `query` and returns hits in engine order, bounded by the engine's
    /// default page size.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchHit>>;

    /// Exact lookup by document identifier. Returns zero or one hit.
    async fn get_by_id(&self, id: &str) -> Result<Vec<SearchHit>>;

    /// Writes the full book under `book.id`, creating or overwriting it.
    async fn upsert(&self, book: &Book) -> Result<()>;

    /// Removes the document. Deleting an unknown id is not an error.
    async fn delete_by_id(&self, id: &str) -> Result<()>;
}
