use thiserror::Error;

/// Failures the gateway reports to its callers.
///
/// Documents that fail to map into a `Book` are not represented here: the
/// result mapper drops them per hit and never escalates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GatewayError {
    /// Malformed request body or missing required parameter.
    #[error("{0}")]
    InvalidRequest(String),

    /// Transport failure or a non-success answer from the search engine.
    /// Carries the engine's message verbatim.
    #[error("{0}")]
    Backend(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Backend(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
