//! Tests against a live Redis server.
//!
//! Ignored by default. Run with a disposable database, e.g.
//! `REDIS_URL=redis://127.0.0.1:6379/15 cargo test -- --ignored`.
//! The database is flushed.

use std::sync::Arc;

use instrumented_cache::cache::STORE_OPERATION;
use instrumented_cache::{Cache, CacheError, KeyValueStore, RedisStore};

async fn connect() -> RedisStore {
    let url = std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379/15".into());
    RedisStore::connect(&url).await.expect("failed to connect to Redis")
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn test_redis_primitives() {
    let store = connect().await;
    store.flush_all().await.unwrap();

    store.set("k", b"v").await.unwrap();
    assert_eq!(store.get("k").await.unwrap(), Some(b"v".to_vec()));
    assert_eq!(store.get("missing").await.unwrap(), None);

    assert_eq!(store.increment("n").await.unwrap(), 1);
    assert_eq!(store.increment("n").await.unwrap(), 2);

    store.append_to_list("l", b"a").await.unwrap();
    assert_eq!(store.append_to_list("l", b"b").await.unwrap(), 2);
    assert_eq!(
        store.range_of_list("l", 0, -1).await.unwrap(),
        vec![b"a".to_vec(), b"b".to_vec()]
    );

    assert!(matches!(store.get("l").await, Err(CacheError::Store(_))));

    store.set_with_expiry("ttl", b"x", 60).await.unwrap();
    assert_eq!(store.get("ttl").await.unwrap(), Some(b"x".to_vec()));
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn test_cache_over_redis() {
    let cache = Cache::new(Arc::new(connect().await)).await.unwrap();

    let key = cache.store("hello").await.unwrap();
    assert_eq!(cache.get_str(&key).await.unwrap(), Some("hello".to_string()));

    let key = cache.store(42).await.unwrap();
    assert_eq!(cache.get_int(&key).await.unwrap(), Some(42));

    assert_eq!(cache.call_count(STORE_OPERATION).await.unwrap(), 2);
    assert_eq!(cache.history(STORE_OPERATION).await.unwrap().records.len(), 2);
}
