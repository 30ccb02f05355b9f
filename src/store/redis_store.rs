//! Redis Store Module
//!
//! [`KeyValueStore`] over a Redis server. Every primitive is a single Redis
//! command issued through a shared `ConnectionManager`, which reconnects on
//! its own after a dropped connection.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::info;

use crate::error::Result;
use crate::store::KeyValueStore;

// == Redis Store ==
/// Redis-backed store. Cloning shares the underlying connection.
#[derive(Clone)]
pub struct RedisStore {
    manager: ConnectionManager,
}

impl RedisStore {
    // == Connect ==
    /// Opens a managed connection to the server at `url`
    /// (e.g. `redis://127.0.0.1:6379/0`).
    pub async fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url)?;
        let manager = ConnectionManager::new(client).await?;
        info!("Connected to Redis at {}", url);
        Ok(Self { manager })
    }

    fn connection(&self) -> ConnectionManager {
        self.manager.clone()
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let _: () = self.connection().set(key, value).await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let value: Option<Vec<u8>> = self.connection().get(key).await?;
        Ok(value)
    }

    async fn set_with_expiry(&self, key: &str, value: &[u8], ttl_secs: u64) -> Result<()> {
        let _: () = self.connection().set_ex(key, value, ttl_secs).await?;
        Ok(())
    }

    async fn increment(&self, key: &str) -> Result<i64> {
        let value: i64 = self.connection().incr(key, 1).await?;
        Ok(value)
    }

    async fn append_to_list(&self, key: &str, value: &[u8]) -> Result<usize> {
        let len: usize = self.connection().rpush(key, value).await?;
        Ok(len)
    }

    async fn range_of_list(&self, key: &str, start: isize, end: isize) -> Result<Vec<Vec<u8>>> {
        let items: Vec<Vec<u8>> = self.connection().lrange(key, start, end).await?;
        Ok(items)
    }

    async fn flush_all(&self) -> Result<()> {
        let mut con = self.connection();
        redis::cmd("FLUSHDB").query_async::<()>(&mut con).await?;
        Ok(())
    }
}
