//! Key-Value Store Trait
//!
//! The primitive set every backend must provide. Each call is atomic on its
//! own; nothing here spans several primitives.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

/// Atomic key-value primitives (`SET`, `GET`, `SETEX`, `INCR`, `RPUSH`,
/// `LRANGE`, `FLUSHDB`).
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Stores `value` under `key`, replacing any previous value and expiry.
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Returns the bytes under `key`, or `None` when absent or expired.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Stores `value` under `key`, expiring after `ttl_secs` seconds.
    async fn set_with_expiry(&self, key: &str, value: &[u8], ttl_secs: u64) -> Result<()>;

    /// Increments the integer under `key` by one and returns the new value.
    /// An absent key counts as 0.
    async fn increment(&self, key: &str) -> Result<i64>;

    /// Appends `value` to the list under `key` and returns the new length.
    async fn append_to_list(&self, key: &str, value: &[u8]) -> Result<usize>;

    /// Returns the inclusive range `start..=end` of the list under `key`.
    /// Negative indices count from the end, so `(0, -1)` is the whole list.
    async fn range_of_list(&self, key: &str, start: isize, end: isize) -> Result<Vec<Vec<u8>>>;

    /// Removes every key in the database.
    async fn flush_all(&self) -> Result<()>;
}

/// Store handle shared by every component.
pub type SharedStore = Arc<dyn KeyValueStore>;
