//! Memory Store Module
//!
//! In-process key-value store with lazy TTL expiration. Mirrors the Redis
//! semantics the facade relies on: `SET` clears expiry, `INCR` keeps it,
//! lists and strings are distinct types.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{CacheError, Result};
use crate::store::{KeyValueStore, StoreEntry, StoredData};

// == Memory State ==
/// Synchronous store state. `MemoryStore` wraps it behind a lock.
#[derive(Debug, Default)]
pub struct MemoryState {
    /// Key-value storage
    entries: HashMap<String, StoreEntry>,
}

impl MemoryState {
    // == Constructor ==
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    // == Live Entry ==
    /// Returns the entry under `key`, dropping it first if it has expired.
    fn live_entry(&mut self, key: &str) -> Option<&mut StoreEntry> {
        if self.entries.get(key).is_some_and(StoreEntry::is_expired) {
            self.entries.remove(key);
        }
        self.entries.get_mut(key)
    }

    // == Set ==
    /// Stores bytes under `key` with optional TTL, replacing whatever was there.
    pub fn set(&mut self, key: &str, value: &[u8], ttl: Option<u64>) -> Result<()> {
        let data = StoredData::Bytes(value.to_vec());
        let entry = match ttl {
            None => StoreEntry::persistent(data),
            Some(secs) => StoreEntry::expiring(data, secs)
                .filter(|_| secs > 0)
                .ok_or_else(|| {
                    CacheError::InvalidRequest(format!(
                        "invalid expire time {} for key '{}'",
                        secs, key
                    ))
                })?,
        };
        self.entries.insert(key.to_string(), entry);
        Ok(())
    }

    // == Get ==
    /// Retrieves the bytes under `key`.
    ///
    /// Expired entries are removed and reported as absent.
    pub fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        match self.live_entry(key) {
            None => Ok(None),
            Some(StoreEntry {
                data: StoredData::Bytes(bytes),
                ..
            }) => Ok(Some(bytes.clone())),
            Some(entry) => Err(wrong_type(key, entry.data.kind())),
        }
    }

    // == Increment ==
    /// Increments the integer under `key`, creating it at 0 first if absent.
    pub fn increment(&mut self, key: &str) -> Result<i64> {
        let Some(entry) = self.live_entry(key) else {
            self.set(key, b"1", None)?;
            return Ok(1);
        };

        let bytes = match &mut entry.data {
            StoredData::Bytes(bytes) => bytes,
            other => return Err(wrong_type(key, other.kind())),
        };

        let current: i64 = std::str::from_utf8(bytes)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| {
                CacheError::Store(format!("value at '{}' is not an integer", key))
            })?;
        let next = current.checked_add(1).ok_or_else(|| {
            CacheError::Store(format!("increment of '{}' would overflow", key))
        })?;

        *bytes = next.to_string().into_bytes();
        Ok(next)
    }

    // == Append To List ==
    /// Appends `value` to the list under `key`, returning the new length.
    pub fn append_to_list(&mut self, key: &str, value: &[u8]) -> Result<usize> {
        match self.live_entry(key) {
            None => {
                let entry = StoreEntry::persistent(StoredData::List(vec![value.to_vec()]));
                self.entries.insert(key.to_string(), entry);
                Ok(1)
            }
            Some(StoreEntry {
                data: StoredData::List(items),
                ..
            }) => {
                items.push(value.to_vec());
                Ok(items.len())
            }
            Some(entry) => Err(wrong_type(key, entry.data.kind())),
        }
    }

    // == Range Of List ==
    /// Returns the inclusive range `start..=end` of the list under `key`.
    pub fn range_of_list(&mut self, key: &str, start: isize, end: isize) -> Result<Vec<Vec<u8>>> {
        match self.live_entry(key) {
            None => Ok(Vec::new()),
            Some(StoreEntry {
                data: StoredData::List(items),
                ..
            }) => Ok(list_range(items, start, end).to_vec()),
            Some(entry) => Err(wrong_type(key, entry.data.kind())),
        }
    }

    // == Flush ==
    /// Removes every entry.
    pub fn flush(&mut self) {
        self.entries.clear();
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the store.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries, expired ones included until swept.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn wrong_type(key: &str, actual: &str) -> CacheError {
    CacheError::Store(format!(
        "WRONGTYPE operation against key '{}' holding a {}",
        key, actual
    ))
}

/// Resolves Redis-style inclusive, possibly negative indices against `items`.
fn list_range(items: &[Vec<u8>], start: isize, end: isize) -> &[Vec<u8>] {
    let len = items.len() as isize;
    let start = if start < 0 { (len + start).max(0) } else { start };
    let end = if end < 0 { len + end } else { end.min(len - 1) };

    if start > end || start >= len {
        return &[];
    }
    &items[start as usize..=end as usize]
}

// == Memory Store ==
/// Shareable in-memory store implementing [`KeyValueStore`].
///
/// Cloning yields another handle onto the same state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes expired entries, returning how many were dropped.
    pub async fn cleanup_expired(&self) -> usize {
        self.state.write().await.cleanup_expired()
    }

    /// Number of entries currently held.
    pub async fn len(&self) -> usize {
        self.state.read().await.len()
    }

    /// Returns true if the store holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        self.state.write().await.set(key, value, None)
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        // Write lock: lazy expiry may remove the entry
        self.state.write().await.get(key)
    }

    async fn set_with_expiry(&self, key: &str, value: &[u8], ttl_secs: u64) -> Result<()> {
        self.state.write().await.set(key, value, Some(ttl_secs))
    }

    async fn increment(&self, key: &str) -> Result<i64> {
        self.state.write().await.increment(key)
    }

    async fn append_to_list(&self, key: &str, value: &[u8]) -> Result<usize> {
        self.state.write().await.append_to_list(key, value)
    }

    async fn range_of_list(&self, key: &str, start: isize, end: isize) -> Result<Vec<Vec<u8>>> {
        self.state.write().await.range_of_list(key, start, end)
    }

    async fn flush_all(&self) -> Result<()> {
        let mut state = self.state.write().await;
        let dropped = state.len();
        state.flush();
        debug!("Flushed in-memory store ({} keys)", dropped);
        Ok(())
    }
}
