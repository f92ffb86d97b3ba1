//! Public client surface + builder.
//! Endpoint defaults live in `constants`.

mod constants;

pub(crate) use constants::{API_KEY_PARAM, NEWS_SENTIMENT_FUNCTION};

use crate::core::ProxyError;
use constants::{DEFAULT_BASE_QUERY, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// HTTP client for the market-data provider.
///
/// Cheap to clone; clones share the underlying connection pool. The client holds
/// no credential: the API key is supplied per call so it stays owned by the
/// handler's configuration.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    http: Client,
    base_query: Url,
}

impl Default for ProviderClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl ProviderClient {
    /// Create a new builder.
    pub fn builder() -> ProviderClientBuilder {
        ProviderClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_query(&self) -> &Url {
        &self.base_query
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct ProviderClientBuilder {
    user_agent: Option<String>,
    base_query: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl ProviderClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the query endpoint (e.g., `https://www.alphavantage.co/query`).
    pub fn base_query(mut self, url: Url) -> Self {
        self.base_query = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<ProviderClient, ProxyError> {
        let base_query = match self.base_query {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_QUERY)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(ProviderClient { http, base_query })
    }
}
