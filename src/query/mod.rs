//! Query Builder Module
//!
//! Pure translation from caller input to engine-facing queries.
//!
//! ## Responsibilities
//! - **Filters**: Decoding the posted filter object into typed `FilterCriteria`, ignoring
//!   unknown keys and values of the wrong shape.
//! - **Structured queries**: Turning criteria into a `bool`/`must` conjunction with one
//!   clause per recognized key (match, term, terms, range).
//! - **Free text**: Forwarding a query string verbatim to the engine's query-string syntax.

pub mod builder;
pub mod filter;

#[cfg(test)]
mod tests;
