//! Book Entity Module
//!
//! Domain representation of the documents served by the gateway.
//!
//! ## Submodules
//! - **`types`**: The `Book` entity, its `BookInfo` listing projection and the error body DTO.
//! - **`mapper`**: Turns raw search hits into `Book` values, resolving identity from the
//!   hit's document id and skipping bodies that do not deserialize.

pub mod mapper;
pub mod types;
