//! Error types for the cache facade
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the store, the facade and the HTTP layer.
///
/// A missing key is not an error at the library level: retrieval returns
/// `Ok(None)`. `NotFound` is only produced by the HTTP layer.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The key-value store cannot be reached
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// The key-value store rejected a command
    #[error("Store error: {0}")]
    Store(String),

    /// Stored bytes could not be decoded into the requested type
    #[error("Parse error: {0}")]
    Parse(String),

    /// Fetching a page over HTTP failed
    #[error("Network failure: {0}")]
    Network(String),

    /// Key not found (HTTP layer only)
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == Redis Error Conversion ==
impl From<redis::RedisError> for CacheError {
    fn from(err: redis::RedisError) -> Self {
        if err.is_io_error()
            || err.is_connection_refusal()
            || err.is_connection_dropped()
            || err.is_timeout()
        {
            CacheError::StoreUnavailable(err.to_string())
        } else {
            CacheError::Store(err.to_string())
        }
    }
}

// == Reqwest Error Conversion ==
impl From<reqwest::Error> for CacheError {
    fn from(err: reqwest::Error) -> Self {
        CacheError::Network(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidRequest(_) | CacheError::Parse(_) => StatusCode::BAD_REQUEST,
            CacheError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            CacheError::Network(_) => StatusCode::BAD_GATEWAY,
            CacheError::Store(_) | CacheError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache facade.
pub type Result<T> = std::result::Result<T, CacheError>;
