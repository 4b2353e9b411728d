use super::protocol::*;
use super::store::{BOOKS_INDEX, BookIndex, SearchHit};
use crate::books::types::Book;
use crate::error::{GatewayError, Result};
use crate::query::builder::SearchQuery;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde_json::Value;

/// `BookIndex` backed by an Elasticsearch-compatible REST API.
///
/// The inner `reqwest::Client` pools connections and is shared by every
/// request handler. Dropping a call's future aborts its in-flight request.
#[derive(Clone)]
pub struct ElasticIndex {
    http_client: reqwest::Client,
    base_url: Url,
    refresh_on_write: bool,
}

impl ElasticIndex {
    pub fn new(base_url: &str) -> Result<Self> {
        let cleaned = base_url.trim_end_matches('/');
        let base_url = Url::parse(cleaned).map_err(|e| {
            GatewayError::InvalidConfig(format!("backend address '{}': {}", cleaned, e))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(GatewayError::InvalidConfig(format!(
                "backend address '{}' is not a base URL",
                cleaned
            )));
        }

        Ok(Self {
            http_client: reqwest::Client::new(),
            base_url,
            refresh_on_write: false,
        })
    }

    /// Makes upserts and deletes wait until the change is visible to searches.
    pub fn with_refresh_on_write(mut self, refresh_on_write: bool) -> Self {
        self.refresh_on_write = refresh_on_write;
        self
    }

    /// Builds `<base>/books/<segments...>`, percent-encoding each segment.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push(BOOKS_INDEX).extend(segments);
        }
        url
    }

    /// Creates the `books` index with its mapping. An existing index is left alone.
    pub async fn ensure_index(&self) -> Result<()> {
        let response = self
            .http_client
            .put(self.endpoint(&[]))
            .json(&books_mapping())
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!("Created index '{}'", BOOKS_INDEX);
            return Ok(());
        }

        let body = response.text().await?;
        if status == StatusCode::BAD_REQUEST && body.contains(INDEX_EXISTS_ERROR) {
            tracing::debug!("Index '{}' already exists", BOOKS_INDEX);
            return Ok(());
        }

        Err(backend_failure(status, body))
    }

    async fn execute_search(&self, body: &Value) -> Result<Vec<SearchHit>> {
        let response = self
            .http_client
            .post(self.endpoint(&[ENDPOINT_SEARCH]))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(backend_failure(status, text));
        }

        let parsed: SearchResponse = response.json().await?;
        Ok(parsed.hits.hits.into_iter().map(SearchHit::from).collect())
    }

    fn write_params(&self) -> Vec<(&'static str, &'static str)> {
        if self.refresh_on_write {
            vec![("refresh", REFRESH_WAIT_FOR)]
        } else {
            Vec::new()
        }
    }
}

#[async_trait]
impl BookIndex for ElasticIndex {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchHit>> {
        tracing::debug!("SEARCH: {:?}", query);
        self.execute_search(&query.to_request_body()).await
    }

    async fn get_by_id(&self, id: &str) -> Result<Vec<SearchHit>> {
        tracing::debug!("GET: {}", id);
        let body = SearchQuery::Id(id.to_string()).to_request_body();
        let mut hits = self.execute_search(&body).await?;
        hits.truncate(1);
        Ok(hits)
    }

    async fn upsert(&self, book: &Book) -> Result<()> {
        let response = self
            .http_client
            .put(self.endpoint(&[ENDPOINT_DOC, book.id.as_str()]))
            .query(&self.write_params())
            .json(book)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(backend_failure(status, text));
        }

        let ack: WriteResponse = response.json().await?;
        tracing::debug!("UPSERT: {} -> {}", ack.id, ack.result);
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        let response = self
            .http_client
            .delete(self.endpoint(&[ENDPOINT_DOC, id]))
            .query(&self.write_params())
            .send()
            .await?;

        let status = response.status();
        if status.is_success() || status == StatusCode::NOT_FOUND {
            tracing::debug!("DELETE: {} -> {}", id, status);
            return Ok(());
        }

        let text = response.text().await?;
        Err(backend_failure(status, text))
    }
}

fn backend_failure(status: StatusCode, body: String) -> GatewayError {
    if body.trim().is_empty() {
        GatewayError::Backend(format!("backend responded with {}", status))
    } else {
        GatewayError::Backend(body)
    }
}
