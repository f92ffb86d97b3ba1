use crate::core::ProxyError;
use crate::sentiment::ProviderResponse;

/// A trait for services that can fetch the provider's news-sentiment payload.
///
/// This is the handler's only outbound dependency. It is implemented by
/// [`ProviderClient`](crate::ProviderClient); tests substitute their own
/// implementation to observe or script the outbound call.
pub trait SentimentService: Send + Sync {
    /// Asynchronously fetches the news-sentiment payload for one ticker.
    ///
    /// # Arguments
    /// * `ticker` - The ticker symbol, forwarded verbatim.
    /// * `api_key` - The provider credential. Implementations must not log it.
    ///
    /// # Returns
    /// A `Future` that resolves to the decoded `ProviderResponse`, or a `ProxyError`
    /// for transport failures, non-success statuses and malformed bodies.
    fn fetch_news_sentiment<'a>(
        &'a self,
        ticker: &'a str,
        api_key: &'a str,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<ProviderResponse, ProxyError>> + Send + 'a>,
    >;
}
