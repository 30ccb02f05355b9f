//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Redis connection URL; the in-memory store is used when unset
    pub redis_url: Option<String>,
    /// Default TTL in seconds for cached pages
    pub page_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Expiry sweep interval in seconds (in-memory store only)
    pub cleanup_interval: u64,
    /// Timeout in seconds for page fetches
    pub fetch_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `REDIS_URL` - Redis connection URL (default: unset, in-memory store)
    /// - `PAGE_TTL` - Page cache TTL in seconds, 0 falls back to the default (default: 10)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 1)
    /// - `FETCH_TIMEOUT` - Page fetch timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            redis_url: env::var("REDIS_URL").ok().filter(|v| !v.trim().is_empty()),
            page_ttl: page_ttl_or_default(parse_var("PAGE_TTL")),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
            fetch_timeout: parse_var("FETCH_TIMEOUT").unwrap_or(defaults.fetch_timeout),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

/// A zero TTL cannot be stored, so it falls back to the default.
fn page_ttl_or_default(value: Option<u64>) -> u64 {
    value
        .filter(|&ttl| ttl > 0)
        .unwrap_or(Config::default().page_ttl)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redis_url: None,
            page_ttl: 10,
            server_port: 3000,
            cleanup_interval: 1,
            fetch_timeout: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.redis_url.is_none());
        assert_eq!(config.page_ttl, 10);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cleanup_interval, 1);
        assert_eq!(config.fetch_timeout, 30);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("REDIS_URL");
        env::remove_var("PAGE_TTL");
        env::remove_var("SERVER_PORT");
        env::remove_var("CLEANUP_INTERVAL");
        env::remove_var("FETCH_TIMEOUT");

        let config = Config::from_env();
        assert!(config.redis_url.is_none());
        assert_eq!(config.page_ttl, 10);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cleanup_interval, 1);
        assert_eq!(config.fetch_timeout, 30);
    }

    #[test]
    fn test_zero_page_ttl_falls_back_to_default() {
        assert_eq!(page_ttl_or_default(Some(0)), 10);
        assert_eq!(page_ttl_or_default(None), 10);
        assert_eq!(page_ttl_or_default(Some(30)), 30);
    }
}
