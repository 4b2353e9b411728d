//! HTTP Boundary Module
//!
//! Axum routes exposing the gateway: decode the request, build the query, run it
//! through the shared `BookIndex`, map the hits and encode the books as JSON.
//!
//! ## Submodules
//! - **`handlers`**: One async handler per endpoint.
//! - **`router`**: Endpoint paths and the `Router` wiring.
//! - **`error`**: Maps `GatewayError` to status codes and `{"error": ...}` bodies.

pub mod error;
pub mod handlers;
pub mod router;
