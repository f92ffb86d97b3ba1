//! The sentiment lookup handler.
//!
//! One request in, one response out: method gate, ticker validation,
//! credential check, a single outbound call, then classification of the
//! provider payload into an HTTP status and a small JSON body.

mod response;

pub use response::{HandlerResponse, ResponseBody};

use reqwest::{Method, StatusCode};
use response::{MSG_ANALYSIS_FAILED, MSG_API_KEY_MISSING, MSG_RATE_LIMITED, MSG_TICKER_REQUIRED};

use crate::{
    config::HandlerConfig,
    core::{ProviderClient, SentimentService},
    sentiment::{AnalysisResult, Lookup, lookup},
};

/// The only method the handler accepts.
pub const ALLOWED_METHOD: Method = Method::POST;

/// An inbound request as handed over by the hosting layer.
///
/// The body must be a JSON object whose `ticker` is a non-empty string; a
/// ticker of any other JSON type is rejected with 400 rather than forwarded.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub method: Method,
    /// Parsed JSON body; `None` when the request had no (valid) JSON body.
    pub body: Option<serde_json::Value>,
}

impl AnalysisRequest {
    pub fn new(method: Method, body: Option<serde_json::Value>) -> Self {
        Self { method, body }
    }

    /// Convenience for a `POST` with `{"ticker": ticker}`.
    pub fn post(ticker: impl Into<String>) -> Self {
        Self::new(
            Method::POST,
            Some(serde_json::json!({ "ticker": ticker.into() })),
        )
    }

    /// The `ticker` field, if present as a non-empty string.
    fn ticker(&self) -> Option<&str> {
        self.body
            .as_ref()?
            .get("ticker")?
            .as_str()
            .filter(|t| !t.is_empty())
    }
}

/// Answers sentiment lookups for a single ticker.
///
/// Stateless between calls; the service and config are fixed at construction
/// and shared by every request.
#[derive(Debug, Clone)]
pub struct AnalysisHandler<S = ProviderClient> {
    service: S,
    config: HandlerConfig,
}

impl<S: SentimentService> AnalysisHandler<S> {
    pub fn new(service: S, config: HandlerConfig) -> Self {
        Self { service, config }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Handle one request. Never fails: every outcome, including outbound
    /// failures, is mapped to a response.
    pub async fn handle(&self, req: &AnalysisRequest) -> HandlerResponse {
        if req.method != ALLOWED_METHOD {
            return HandlerResponse::method_not_allowed(ALLOWED_METHOD);
        }

        let Some(ticker) = req.ticker() else {
            return HandlerResponse::error(StatusCode::BAD_REQUEST, MSG_TICKER_REQUIRED);
        };

        let Some(api_key) = self.config.api_key() else {
            tracing::error!("provider API key is not configured");
            return HandlerResponse::error(StatusCode::INTERNAL_SERVER_ERROR, MSG_API_KEY_MISSING);
        };

        let outcome = self
            .service
            .fetch_news_sentiment(ticker, api_key)
            .await
            .and_then(|payload| {
                let found = lookup(&payload, ticker)?;
                if found == Lookup::Throttled {
                    tracing::warn!(
                        ticker,
                        advisory = ?payload.advisory(),
                        "provider rate limit likely hit"
                    );
                }
                Ok(found)
            });

        match outcome {
            Ok(Lookup::Found(result)) => HandlerResponse::analysis(StatusCode::OK, result),
            Ok(Lookup::NotFound) => {
                tracing::debug!(ticker, "no feed item mentions ticker");
                HandlerResponse::analysis(StatusCode::NOT_FOUND, AnalysisResult::not_found())
            }
            Ok(Lookup::Throttled) => {
                HandlerResponse::error(StatusCode::TOO_MANY_REQUESTS, MSG_RATE_LIMITED)
            }
            Err(e) => {
                tracing::error!(ticker, error = %e, "news sentiment lookup failed");
                HandlerResponse::error(StatusCode::INTERNAL_SERVER_ERROR, MSG_ANALYSIS_FAILED)
            }
        }
    }
}
