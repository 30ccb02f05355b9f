//! Store Module
//!
//! The key-value primitives the cache facade is built on, plus two backends:
//! an in-process store with TTL expiry and a Redis-backed store.

mod entry;
mod memory;
mod redis_store;
mod traits;

// Re-export public types
pub use entry::{StoreEntry, StoredData};
pub use memory::{MemoryState, MemoryStore};
pub use redis_store::RedisStore;
pub use traits::{KeyValueStore, SharedStore};
