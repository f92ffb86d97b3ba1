use crate::{
    core::{
        ProviderClient, ProxyError,
        client::{API_KEY_PARAM, NEWS_SENTIMENT_FUNCTION},
        net,
    },
    sentiment::wire::ProviderResponse,
};

pub(super) async fn fetch_news_sentiment(
    client: &ProviderClient,
    ticker: &str,
    api_key: &str,
) -> Result<ProviderResponse, ProxyError> {
    let mut url = client.base_query().clone();
    url.query_pairs_mut()
        .append_pair("function", NEWS_SENTIMENT_FUNCTION)
        .append_pair("tickers", ticker)
        .append_pair(API_KEY_PARAM, api_key);

    tracing::debug!(url = %net::redacted(&url), "requesting news sentiment");

    let resp = client
        .http()
        .get(url.clone())
        .send()
        .await
        .map_err(net::transport)?;

    if !resp.status().is_success() {
        return Err(ProxyError::Status {
            status: resp.status().as_u16(),
            url: net::redacted(&url),
        });
    }

    let body = resp.text().await.map_err(net::transport)?;
    let payload: ProviderResponse = serde_json::from_str(&body)?;
    Ok(payload)
}
