use std::env;

use crate::feed::FeedConfig;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Tavola REST API
    pub api_url: String,
    /// Restaurants fetched per feed page
    pub page_size: usize,
    /// Scroll-position ratio above which the next page is fetched
    pub scroll_threshold: f64,
    /// Server-side ordering key for the feed
    pub order_by: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = FeedConfig::default();

        Self {
            api_url: env::var("TAVOLA_API_URL")
                .unwrap_or_else(|_| "http://localhost:8001".to_string()),
            page_size: parse_env("TAVOLA_PAGE_SIZE", defaults.page_size),
            scroll_threshold: parse_env("TAVOLA_SCROLL_THRESHOLD", defaults.scroll_threshold),
            order_by: env::var("TAVOLA_ORDER_BY").unwrap_or_else(|_| defaults.order_by),
        }
    }

    /// The feed-controller slice of the configuration
    pub fn feed(&self) -> FeedConfig {
        FeedConfig {
            page_size: self.page_size,
            scroll_threshold: self.scroll_threshold,
            order_by: self.order_by.clone(),
        }
    }
}

/// Read and parse an env var, warning when a set value does not parse
fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("ignoring unparsable {}: {:?}", name, raw);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own var name; the process environment is global.

    #[test]
    fn env_value_overrides_default() {
        env::set_var("TAVOLA_TEST_PAGE_SIZE", "12");
        assert_eq!(parse_env("TAVOLA_TEST_PAGE_SIZE", 9usize), 12);
        env::remove_var("TAVOLA_TEST_PAGE_SIZE");
    }

    #[test]
    fn unparsable_env_value_falls_back_to_default() {
        env::set_var("TAVOLA_TEST_THRESHOLD", "very-high");
        assert_eq!(parse_env("TAVOLA_TEST_THRESHOLD", 0.6f64), 0.6);
        env::remove_var("TAVOLA_TEST_THRESHOLD");
    }

    #[test]
    fn unset_env_value_is_the_default() {
        assert_eq!(parse_env("TAVOLA_TEST_UNSET", 9usize), 9);
    }
}
