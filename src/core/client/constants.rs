//! Centralized constants for the provider endpoint and UA.

/// Identifies the proxy to the provider.
pub(crate) const USER_AGENT: &str = concat!("watchlist-proxy/", env!("CARGO_PKG_VERSION"));

/// Alpha Vantage query endpoint; every function is selected via the `function` parameter.
pub(crate) const DEFAULT_BASE_QUERY: &str = "https://www.alphavantage.co/query";

/// Provider function that returns the news feed with per-ticker sentiment.
pub(crate) const NEWS_SENTIMENT_FUNCTION: &str = "NEWS_SENTIMENT";

/// Name of the query parameter carrying the credential.
pub(crate) const API_KEY_PARAM: &str = "apikey";
