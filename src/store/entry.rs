//! Store Entry Module
//!
//! Defines the structure for individual store entries with TTL support.

use std::time::{SystemTime, UNIX_EPOCH};

// == Stored Data ==
/// The two value shapes the store knows about.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredData {
    /// Plain byte string (SET/GET/INCR)
    Bytes(Vec<u8>),
    /// Ordered list of byte strings (RPUSH/LRANGE)
    List(Vec<Vec<u8>>),
}

impl StoredData {
    /// Name of the shape, used in wrong-type errors.
    pub fn kind(&self) -> &'static str {
        match self {
            StoredData::Bytes(_) => "string",
            StoredData::List(_) => "list",
        }
    }
}

// == Store Entry ==
/// Represents a single store entry with data and metadata.
#[derive(Debug, Clone)]
pub struct StoreEntry {
    /// The stored data
    pub data: StoredData,
    /// Expiration timestamp (Unix milliseconds), None = no expiration
    pub expires_at: Option<u64>,
}

impl StoreEntry {
    // == Constructors ==
    /// Creates an entry that never expires.
    pub fn persistent(data: StoredData) -> Self {
        Self {
            data,
            expires_at: None,
        }
    }

    /// Creates an entry expiring `ttl_seconds` from now.
    ///
    /// Returns `None` when the deadline does not fit in a millisecond timestamp.
    pub fn expiring(data: StoredData, ttl_seconds: u64) -> Option<Self> {
        let expires_at = ttl_seconds
            .checked_mul(1000)
            .and_then(|ms| current_timestamp_ms().checked_add(ms))?;

        Some(Self {
            data,
            expires_at: Some(expires_at),
        })
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time reaches the expiration time.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires) => current_timestamp_ms() >= expires,
            None => false,
        }
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
///
/// A clock set before the Unix epoch reads as 0.
fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
