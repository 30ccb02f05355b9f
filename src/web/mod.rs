//! Web Module
//!
//! Page fetching over HTTP and the TTL page cache built on the store.

mod fetcher;
mod page_cache;

pub use fetcher::{HttpFetcher, PageFetcher};
pub use page_cache::{cache_key, count_key, FetchedPage, PageCache, DEFAULT_PAGE_TTL};
