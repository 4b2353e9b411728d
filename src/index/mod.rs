//! Search Gateway Module
//!
//! Executes queries against the single `books` collection of the search engine.
//!
//! ## Core Concepts
//! - **`BookIndex`**: The capability set the rest of the crate depends on: search,
//!   point lookup, upsert and delete. Each call is one round-trip with no retry.
//! - **Backends**: `ElasticIndex` talks to an Elasticsearch-compatible REST API over
//!   `reqwest`; `MemoryIndex` is a deterministic in-process fake used by tests and
//!   local runs.
//! - **Wire protocol**: `protocol` holds the endpoint names, response envelopes and the
//!   index mapping the clause semantics rely on.

pub mod analyzer;
pub mod elastic;
pub mod memory;
pub mod protocol;
pub mod store;
