//! Book Entity Types
//!
//! The normalized representation of a document stored in the `books` index,
//! plus the lighter projection returned by listing endpoints.

use serde::{Deserialize, Serialize};

/// A book as stored in (and read back from) the search engine.
///
/// Missing fields fall back to their defaults when a document body is
/// deserialized, so only a type mismatch makes a body unreadable. The `id`
/// found in a body is never trusted; the result mapper replaces it with the
/// engine's document identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
    pub id: String,
    pub name: String,
    pub author: String,
    pub edition: String,
    pub publisher: String,
    /// ISO `YYYY-MM-DD`.
    pub release_date: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub page_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Expected range 0-5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
}

/// Listing view of a [`Book`]: everything except the full `content`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookInfo {
    pub id: String,
    pub name: String,
    pub author: String,
    pub edition: String,
    pub publisher: String,
    pub release_date: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub page_count: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
}

impl From<Book> for BookInfo {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            name: book.name,
            author: book.author,
            edition: book.edition,
            publisher: book.publisher,
            release_date: book.release_date,
            description: book.description,
            page_count: book.page_count,
            categories: book.categories,
            tags: book.tags,
            rating: book.rating,
            review_count: book.review_count,
        }
    }
}

/// Error body returned by every failing HTTP endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
