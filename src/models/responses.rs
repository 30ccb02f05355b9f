//! Response DTOs for the cache API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::{CallHistory, CallRecord, Decoded};

/// Response body for the STORE operation (PUT /store)
#[derive(Debug, Clone, Serialize)]
pub struct StoreResponse {
    /// Generated key the value was stored under
    pub key: String,
}

impl StoreResponse {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Response body for GET /get/:key
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key
    pub key: String,
    /// The decoded value
    pub value: Decoded,
}

impl GetResponse {
    pub fn new(key: impl Into<String>, value: Decoded) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Response body for GET /calls/:operation
#[derive(Debug, Clone, Serialize)]
pub struct CallsResponse {
    /// Operation name
    pub operation: String,
    /// Value of the call counter
    pub count: i64,
    /// Recorded input/output pairs
    pub history: Vec<CallRecord>,
    /// Text rendering of the history
    pub replay: String,
}

impl CallsResponse {
    pub fn new(count: i64, history: CallHistory) -> Self {
        let replay = history.to_string();
        Self {
            operation: history.operation,
            count,
            history: history.records,
            replay,
        }
    }
}

/// Response body for GET /page
#[derive(Debug, Clone, Serialize)]
pub struct PageResponse {
    pub url: String,
    pub content: String,
    /// Accesses of this URL so far, this one included
    pub access_count: i64,
}

/// Response body for GET /page/count
#[derive(Debug, Clone, Serialize)]
pub struct CountResponse {
    pub url: String,
    pub access_count: i64,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
