#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use serde_json::Value;
use std::{
    fs,
    path::Path,
    sync::atomic::{AtomicUsize, Ordering},
};
use url::Url;
use watchlist_proxy::{
    AnalysisHandler, HandlerConfig, ProviderClient, ProviderResponse, ProxyError, SentimentService,
};

pub const API_KEY: &str = "test-secret-key-7Q2X";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, name: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{}_{}.{}", endpoint, name, ext);
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn client_for(server: &MockServer) -> ProviderClient {
    ProviderClient::builder()
        .base_query(Url::parse(&format!("{}/query", server.base_url())).unwrap())
        .build()
        .unwrap()
}

pub fn handler_for(server: &MockServer) -> AnalysisHandler {
    AnalysisHandler::new(
        client_for(server),
        HandlerConfig::new(Some(API_KEY.to_string())),
    )
}

/// Mock the `NEWS_SENTIMENT` query for `ticker`, answering with `body`.
pub fn mock_news_sentiment<'a>(server: &'a MockServer, ticker: &str, body: String) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("function", "NEWS_SENTIMENT")
            .query_param("tickers", ticker)
            .query_param("apikey", API_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

/// Mock that matches any request to the query endpoint; used to prove no call happens.
pub fn mock_any_query(server: &MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.path("/query");
        then.status(200)
            .header("content-type", "application/json")
            .body("{}");
    })
}

/// A minimal `{ "feed": [ { "ticker_sentiment": [...] } ] }` payload.
pub fn feed_with(entries: &[(&str, &str, Value)]) -> String {
    let ticker_sentiment: Vec<Value> = entries
        .iter()
        .map(|(ticker, label, score)| {
            serde_json::json!({
                "ticker": ticker,
                "sentiment_label": label,
                "relevance_score": score,
            })
        })
        .collect();
    serde_json::json!({ "feed": [ { "ticker_sentiment": ticker_sentiment } ] }).to_string()
}

/// In-process `SentimentService` that counts calls and replays a scripted outcome.
pub struct CountingService {
    calls: AtomicUsize,
    reply: fn() -> Result<ProviderResponse, ProxyError>,
}

impl CountingService {
    pub fn new(reply: fn() -> Result<ProviderResponse, ProxyError>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            reply,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SentimentService for CountingService {
    fn fetch_news_sentiment<'a>(
        &'a self,
        _ticker: &'a str,
        _api_key: &'a str,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<ProviderResponse, ProxyError>> + Send + 'a>,
    > {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let out = (self.reply)();
        Box::pin(async move { out })
    }
}

pub fn decoded(body: &str) -> ProviderResponse {
    serde_json::from_str(body).unwrap()
}
