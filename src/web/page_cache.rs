//! Page Cache Module
//!
//! Caches fetched pages in the store with a TTL and counts every access.

use std::sync::Arc;

use tracing::debug;

use crate::cache::decode_int;
use crate::error::Result;
use crate::store::SharedStore;
use crate::web::PageFetcher;

/// TTL in seconds applied by [`PageCache::fetch_page`] unless configured otherwise.
pub const DEFAULT_PAGE_TTL: u64 = 10;

/// Key of the cached body of `url`.
pub fn cache_key(url: &str) -> String {
    format!("cache:{}", url)
}

/// Key of the access counter of `url`.
pub fn count_key(url: &str) -> String {
    format!("count:{}", url)
}

/// Outcome of a single page access.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedPage {
    /// Page body
    pub content: String,
    /// Access counter value after this access
    pub access_count: i64,
    /// Whether the body came from the cache
    pub cache_hit: bool,
}

// == Page Cache ==
/// TTL cache of page bodies keyed by URL.
#[derive(Clone)]
pub struct PageCache {
    store: SharedStore,
    fetcher: Arc<dyn PageFetcher>,
    ttl: u64,
}

impl PageCache {
    /// Creates a page cache with the default TTL.
    pub fn new(store: SharedStore, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self::with_ttl(store, fetcher, DEFAULT_PAGE_TTL)
    }

    /// Creates a page cache whose entries live `ttl` seconds.
    pub fn with_ttl(store: SharedStore, fetcher: Arc<dyn PageFetcher>, ttl: u64) -> Self {
        Self {
            store,
            fetcher,
            ttl,
        }
    }

    /// Configured TTL in seconds.
    pub fn ttl(&self) -> u64 {
        self.ttl
    }

    /// Returns the page at `url` using the configured TTL.
    pub async fn fetch_page(&self, url: &str) -> Result<String> {
        self.fetch_page_with_ttl(url, self.ttl).await
    }

    /// Returns the page at `url`, fetching it only if no cached copy is live.
    pub async fn fetch_page_with_ttl(&self, url: &str, ttl_secs: u64) -> Result<String> {
        Ok(self.fetch_tracked(url, ttl_secs).await?.content)
    }

    /// Fetches `url` through the cache and reports the access it made.
    ///
    /// The access counter is bumped before the cache is consulted, so hits,
    /// misses and failed fetches all count. The returned count is the value
    /// produced by that increment. Fetch errors are returned as is.
    pub async fn fetch_tracked(&self, url: &str, ttl_secs: u64) -> Result<FetchedPage> {
        let access_count = self.store.increment(&count_key(url)).await?;

        let key = cache_key(url);
        if let Some(cached) = self.store.get(&key).await? {
            debug!("Page cache hit for {} (access {})", url, access_count);
            return Ok(FetchedPage {
                content: String::from_utf8_lossy(&cached).into_owned(),
                access_count,
                cache_hit: true,
            });
        }

        debug!("Page cache miss for {}, fetching", url);
        let content = self.fetcher.fetch(url).await?;
        self.store
            .set_with_expiry(&key, content.as_bytes(), ttl_secs)
            .await?;
        Ok(FetchedPage {
            content,
            access_count,
            cache_hit: false,
        })
    }

    /// Number of recorded accesses of `url` (0 if never fetched).
    pub async fn access_count(&self, url: &str) -> Result<i64> {
        Ok(self
            .store
            .get(&count_key(url))
            .await?
            .map(decode_int)
            .transpose()?
            .unwrap_or(0))
    }
}
