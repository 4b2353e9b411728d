//! Book Search Gateway Library
//!
//! Translates loosely structured book searches into structured queries against an
//! Elasticsearch-compatible engine and normalizes the hits into `Book` entities.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! Data flows `api` -> `query` -> `index` -> `books::mapper` -> `api`:
//!
//! - **`books`**: The `Book` entity, its listing projection and the hit-to-entity mapper.
//! - **`query`**: Filter decoding and the pure filter/free-text to query translation.
//! - **`index`**: The `BookIndex` capability set with an Elasticsearch adapter and an
//!   in-memory fake.
//! - **`api`**: Axum handlers and router for the public HTTP surface.
//! - **`config`**, **`error`**, **`sample`**: Settings, the error taxonomy and sample data.

pub mod api;
pub mod books;
pub mod config;
pub mod error;
pub mod index;
pub mod query;
pub mod sample;
