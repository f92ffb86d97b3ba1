//! watchlist-proxy: server-side news-sentiment lookup for one ticker.
//!
//! The [`AnalysisHandler`] accepts a `POST` carrying `{"ticker": "..."}`,
//! calls the provider's `NEWS_SENTIMENT` function with a server-held API key,
//! and answers with the sentiment label and relevance score of the first feed
//! item that mentions the ticker.
//!
//! ```no_run
//! use watchlist_proxy::{AnalysisHandler, AnalysisRequest, HandlerConfig, ProviderClient};
//!
//! # async fn run() -> Result<(), watchlist_proxy::ProxyError> {
//! let handler = AnalysisHandler::new(ProviderClient::builder().build()?, HandlerConfig::from_env());
//! let resp = handler.handle(&AnalysisRequest::post("AAPL")).await;
//! println!("{} {:?}", resp.status, resp.body_json());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod handler;
pub mod sentiment;
#[cfg(feature = "server")]
pub mod server;

pub use config::HandlerConfig;
pub use crate::core::{ProviderClient, ProviderClientBuilder, ProxyError, SentimentService};
pub use handler::{ALLOWED_METHOD, AnalysisHandler, AnalysisRequest, HandlerResponse, ResponseBody};
pub use sentiment::{AnalysisResult, Lookup, ProviderResponse, RelevanceScore};
