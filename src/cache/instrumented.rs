//! Instrumented Cache Module
//!
//! Stores scalars under generated keys while counting calls and recording
//! their history in the same store.

use tracing::{debug, info};
use uuid::Uuid;

use crate::cache::decode::{decode_int, decode_utf8, Decoded, Decoder};
use crate::cache::recorder::CallRecorder;
use crate::cache::replay::{self, CallHistory};
use crate::cache::Scalar;
use crate::error::Result;
use crate::store::SharedStore;

/// Operation name under which `Cache::store` calls are counted and recorded.
pub const STORE_OPERATION: &str = "Cache.store";

// == Cache ==
/// Instrumented facade over a [`KeyValueStore`](crate::store::KeyValueStore).
///
/// Holds nothing but the store handle; cloning is cheap.
#[derive(Clone)]
pub struct Cache {
    store: SharedStore,
}

impl Cache {
    // == Constructor ==
    /// Creates the facade and flushes the entire database.
    ///
    /// Every key in the store is removed, including those written by other
    /// users of the same database.
    pub async fn new(store: SharedStore) -> Result<Self> {
        store.flush_all().await?;
        info!("Cache initialized, database flushed");
        Ok(Self { store })
    }

    // == Store ==
    /// Stores `value` under a fresh random key and returns the key.
    ///
    /// Side effects happen in order: call counter, input record, value,
    /// output record. The sequence is not atomic; a failure part way leaves
    /// the earlier writes in place.
    pub async fn store(&self, value: impl Into<Scalar>) -> Result<String> {
        let value = value.into();
        let recorder = CallRecorder::new(self.store.as_ref(), STORE_OPERATION);

        recorder.count_call().await?;
        recorder.record_input(&value.args_repr()).await?;

        let key = Uuid::new_v4().to_string();
        self.store.set(&key, &value.to_bytes()).await?;

        recorder.record_output(&key).await?;
        debug!("Stored {} under {}", value.repr(), key);
        Ok(key)
    }

    // == Get ==
    /// Returns the raw bytes under `key`, or `None` if absent.
    pub async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.store.get(key).await
    }

    /// Returns the value under `key` passed through `decoder`.
    pub async fn get_with<T, F>(&self, key: &str, decoder: F) -> Result<Option<T>>
    where
        F: FnOnce(Vec<u8>) -> Result<T>,
    {
        self.get(key).await?.map(decoder).transpose()
    }

    /// Returns the value under `key` decoded by a tagged strategy.
    pub async fn get_as(&self, key: &str, decoder: Decoder) -> Result<Option<Decoded>> {
        self.get_with(key, |bytes| decoder.decode(bytes)).await
    }

    /// Returns the value under `key` as UTF-8 text.
    pub async fn get_str(&self, key: &str) -> Result<Option<String>> {
        self.get_with(key, decode_utf8).await
    }

    /// Returns the value under `key` parsed as an integer.
    pub async fn get_int(&self, key: &str) -> Result<Option<i64>> {
        self.get_with(key, decode_int).await
    }

    // == Instrumentation Readers ==
    /// Number of recorded calls of `operation` (0 if never called).
    pub async fn call_count(&self, operation: &str) -> Result<i64> {
        Ok(self.get_with(operation, decode_int).await?.unwrap_or(0))
    }

    /// Recorded history of `operation`.
    pub async fn history(&self, operation: &str) -> Result<CallHistory> {
        replay::replay(self.store.as_ref(), operation).await
    }

    /// Prints the recorded history of `operation` to stdout.
    pub async fn replay(&self, operation: &str) -> Result<()> {
        replay::print_replay(self.store.as_ref(), operation).await
    }
}
