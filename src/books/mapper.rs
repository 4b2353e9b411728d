use super::types::Book;
use crate::index::store::SearchHit;

/// Converts raw hits into books, in hit order.
///
/// The hit's document identifier always wins over any `id` in the body.
/// Bodies that do not fit the `Book` shape are dropped; one bad document
/// never fails the batch.
pub fn map_hits(hits: Vec<SearchHit>) -> Vec<Book> {
    hits.into_iter()
        .filter_map(|hit| match serde_json::from_value::<Book>(hit.source) {
            Ok(mut book) => {
                book.id = hit.id;
                Some(book)
            }
            Err(e) => {
                tracing::debug!("Dropping hit {}: {}", hit.id, e);
                None
            }
        })
        .collect()
}
