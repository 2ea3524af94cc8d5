//! Client error types

use thiserror::Error;

/// Gateway error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend reported a failure (non-2xx status or `success: false`)
    #[error("{0}")]
    Api(String),

    /// Envelope succeeded but carried no payload for a single-entity fetch
    #[error("Not found: {0}")]
    NotFound(String),

    /// Response body did not match the expected envelope shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Local input rejected before any network call
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for gateway operations
pub type ClientResult<T> = Result<T, ClientError>;
