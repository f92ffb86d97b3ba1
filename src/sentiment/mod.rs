//! News-sentiment lookups against the provider's `NEWS_SENTIMENT` function.

mod api;
mod model;
mod wire;

pub use model::{AnalysisResult, Lookup, lookup};
pub use wire::{FeedItem, ProviderResponse, RelevanceScore, TickerSentiment};

use crate::core::{ProviderClient, ProxyError, SentimentService};

impl ProviderClient {
    /// Fetches the news-sentiment payload for `ticker`, authenticating with `api_key`.
    ///
    /// Issues exactly one GET; there is no retry.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::Http`] on transport failure, [`ProxyError::Status`] on a
    /// non-2xx response and [`ProxyError::Json`] if the body does not decode.
    #[tracing::instrument(skip(self, api_key), err)]
    pub async fn news_sentiment(
        &self,
        ticker: &str,
        api_key: &str,
    ) -> Result<ProviderResponse, ProxyError> {
        api::fetch_news_sentiment(self, ticker, api_key).await
    }
}

impl SentimentService for ProviderClient {
    fn fetch_news_sentiment<'a>(
        &'a self,
        ticker: &'a str,
        api_key: &'a str,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<ProviderResponse, ProxyError>> + Send + 'a>,
    > {
        Box::pin(self.news_sentiment(ticker, api_key))
    }
}
