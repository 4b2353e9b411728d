use super::error::ApiError;
use crate::books::mapper::map_hits;
use crate::books::types::{Book, BookInfo};
use crate::error::GatewayError;
use crate::index::store::SharedIndex;
use crate::query::builder::{SearchQuery, build_filter_query, build_full_text_query};
use crate::query::filter::{FilterCriteria, is_date_valid};

use axum::body::Bytes;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Deserialize)]
pub struct FullTextParams {
    pub query_str: Option<String>,
}

/// `GET /search/full_text_search?query_str=...`
///
/// The query string goes to the engine's query-string parser as-is, so
/// callers may use its full grammar (field selectors, boolean operators).
pub async fn handle_full_text_search(
    Extension(index): Extension<SharedIndex>,
    Query(params): Query<FullTextParams>,
) -> Result<Json<Vec<BookInfo>>, ApiError> {
    let query_str = match params.query_str {
        Some(q) if !q.is_empty() => q,
        _ => {
            return Err(GatewayError::InvalidRequest(
                "query_str parameter is required".to_string(),
            )
            .into());
        }
    };

    tracing::debug!("Full-text search: {}", query_str);
    let books = run_search(&index, &build_full_text_query(&query_str)).await?;
    Ok(Json(books))
}

/// `POST /filter/books` with a JSON object of criteria.
pub async fn handle_filter_books(
    Extension(index): Extension<SharedIndex>,
    body: Bytes,
) -> Result<Json<Vec<BookInfo>>, ApiError> {
    let criteria = FilterCriteria::from_body(&body)?;
    let query = build_filter_query(&criteria);

    if query.is_match_all() {
        tracing::debug!("Filter search without clauses, matching all books");
    } else {
        tracing::debug!("Filter search with {} clause(s)", query.must.len());
    }
    let books = run_search(&index, &SearchQuery::Bool(query)).await?;
    Ok(Json(books))
}

/// `GET /books/:id` returns the full book, `content` included.
pub async fn handle_get_book(
    Extension(index): Extension<SharedIndex>,
    Path(id): Path<String>,
) -> Result<Json<Book>, ApiError> {
    let hits = index.get_by_id(&id).await?;

    match map_hits(hits).into_iter().next() {
        Some(book) => Ok(Json(book)),
        None => Err(GatewayError::NotFound(format!("book {} not found", id)).into()),
    }
}

/// `PUT /books/:id` creates or replaces a book. The path id wins over any id in the body.
///
/// Rejects bodies whose `release_date` is missing or not a `YYYY-MM-DD` date.
pub async fn handle_put_book(
    Extension(index): Extension<SharedIndex>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Book>, ApiError> {
    let mut book: Book = serde_json::from_slice(&body)
        .map_err(|e| GatewayError::InvalidRequest(format!("invalid book format: {}", e)))?;
    book.id = id;

    if !is_date_valid(&book.release_date) {
        return Err(GatewayError::InvalidRequest(format!(
            "invalid book format: release_date '{}' is not a YYYY-MM-DD date",
            book.release_date
        ))
        .into());
    }

    index.upsert(&book).await?;
    tracing::info!("Stored book {}", book.id);
    Ok(Json(book))
}

pub async fn handle_delete_book(
    Extension(index): Extension<SharedIndex>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    index.delete_by_id(&id).await?;
    tracing::info!("Deleted book {}", id);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn handle_health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn run_search(index: &SharedIndex, query: &SearchQuery) -> Result<Vec<BookInfo>, ApiError> {
    let hits = index.search(query).await?;
    let total = hits.len();
    let books: Vec<BookInfo> = map_hits(hits).into_iter().map(BookInfo::from).collect();

    if books.len() < total {
        tracing::debug!("Dropped {} malformed hit(s)", total - books.len());
    }
    Ok(books)
}
