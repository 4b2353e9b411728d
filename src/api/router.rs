use super::handlers::*;
use crate::index::store::SharedIndex;

use axum::routing::{get, post};
use axum::{Extension, Router};

// --- API Endpoints ---

pub const ENDPOINT_FULL_TEXT_SEARCH: &str = "/search/full_text_search";
pub const ENDPOINT_FILTER_BOOKS: &str = "/filter/books";
pub const ENDPOINT_BOOK: &str = "/books/:id";
pub const ENDPOINT_HEALTH: &str = "/health";

/// Routes of the public HTTP surface, all sharing one read-only index handle.
pub fn build_router(index: SharedIndex) -> Router {
    Router::new()
        .route(ENDPOINT_FULL_TEXT_SEARCH, get(handle_full_text_search))
        .route(ENDPOINT_FILTER_BOOKS, post(handle_filter_books))
        .route(
            ENDPOINT_BOOK,
            get(handle_get_book)
                .put(handle_put_book)
                .delete(handle_delete_book),
        )
        .route(ENDPOINT_HEALTH, get(handle_health))
        .layer(Extension(index))
}
