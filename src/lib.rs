//! Instrumented Cache - call-counting cache facade over a key-value store
//!
//! Stores scalars under generated keys while counting calls and recording
//! their inputs and outputs, and caches fetched web pages with a TTL and a
//! per-URL access counter.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod tasks;
pub mod web;

pub use api::AppState;
pub use cache::{Cache, Scalar};
pub use config::Config;
pub use error::{CacheError, Result};
pub use store::{KeyValueStore, MemoryStore, RedisStore, SharedStore};
pub use tasks::spawn_cleanup_task;
pub use web::{FetchedPage, HttpFetcher, PageCache, PageFetcher};
