//! API Handlers
//!
//! HTTP request handlers for each endpoint of the cache API.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::info;

use crate::cache::{Cache, Decoder};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    CallsResponse, CountResponse, GetQuery, GetResponse, HealthResponse, PageQuery, PageResponse,
    StoreRequest, StoreResponse,
};
use crate::store::{MemoryStore, RedisStore, SharedStore};
use crate::web::{HttpFetcher, PageCache, PageFetcher};

/// Application state shared across all handlers.
///
/// Both components hold a handle onto the same store.
#[derive(Clone)]
pub struct AppState {
    /// Instrumented value cache
    pub cache: Cache,
    /// TTL page cache
    pub pages: PageCache,
}

impl AppState {
    /// Creates a new AppState from its components.
    pub fn new(cache: Cache, pages: PageCache) -> Self {
        Self { cache, pages }
    }

    /// Builds the state over `store`, flushing it.
    pub async fn with_store(
        store: SharedStore,
        fetcher: Arc<dyn PageFetcher>,
        page_ttl: u64,
    ) -> Result<Self> {
        let cache = Cache::new(store.clone()).await?;
        let pages = PageCache::with_ttl(store, fetcher, page_ttl);
        Ok(Self::new(cache, pages))
    }

    /// Creates a new AppState from configuration.
    ///
    /// Connects to Redis when `redis_url` is set; otherwise uses `memory`.
    pub async fn from_config(config: &Config, memory: MemoryStore) -> Result<Self> {
        let store: SharedStore = match &config.redis_url {
            Some(url) => Arc::new(RedisStore::connect(url).await?) as SharedStore,
            None => {
                info!("Using in-memory store");
                Arc::new(memory) as SharedStore
            }
        };
        let fetcher = HttpFetcher::new(Duration::from_secs(config.fetch_timeout))?;
        Self::with_store(store, Arc::new(fetcher), config.page_ttl).await
    }
}

/// Handler for PUT /store
///
/// Stores a scalar under a generated key and returns the key.
pub async fn store_handler(
    State(state): State<AppState>,
    Json(req): Json<StoreRequest>,
) -> Result<Json<StoreResponse>> {
    let key = state.cache.store(req.value).await?;
    Ok(Json(StoreResponse::new(key)))
}

/// Handler for GET /get/:key
///
/// Retrieves and decodes a stored value (`?as=raw|string|int`, default string).
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(query): Query<GetQuery>,
) -> Result<Json<GetResponse>> {
    let decoder = Decoder::from(query.decode_as);
    let value = state
        .cache
        .get_as(&key, decoder)
        .await?
        .ok_or_else(|| CacheError::NotFound(key.clone()))?;

    Ok(Json(GetResponse::new(key, value)))
}

/// Handler for GET /calls/:operation
///
/// Returns the call counter and recorded history of an operation.
pub async fn calls_handler(
    State(state): State<AppState>,
    Path(operation): Path<String>,
) -> Result<Json<CallsResponse>> {
    let count = state.cache.call_count(&operation).await?;
    let history = state.cache.history(&operation).await?;
    Ok(Json(CallsResponse::new(count, history)))
}

/// Handler for GET /page?url=..&ttl=..
///
/// Returns the page body, from cache when a live copy exists.
pub async fn page_handler(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PageResponse>> {
    if let Some(error_msg) = query.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let ttl = query.ttl.unwrap_or_else(|| state.pages.ttl());
    let page = state.pages.fetch_tracked(&query.url, ttl).await?;

    Ok(Json(PageResponse {
        url: query.url,
        content: page.content,
        access_count: page.access_count,
    }))
}

/// Handler for GET /page/count?url=..
///
/// Returns how many times a URL has been requested.
pub async fn page_count_handler(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<CountResponse>> {
    if let Some(error_msg) = query.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let access_count = state.pages.access_count(&query.url).await?;
    Ok(Json(CountResponse {
        url: query.url,
        access_count,
    }))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
