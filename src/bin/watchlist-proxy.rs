//! HTTP host for the sentiment lookup handler.

use std::{net::SocketAddr, sync::Arc};

use tracing_subscriber::EnvFilter;
use watchlist_proxy::{
    AnalysisHandler, HandlerConfig, ProviderClient,
    server::{ROUTE, router},
};

const ADDR_ENV: &str = "WATCHLIST_PROXY_ADDR";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = HandlerConfig::from_env();
    if !config.has_api_key() {
        tracing::warn!("ALPHA_VANTAGE_API_KEY is not set; every lookup will answer 500");
    }

    let handler = Arc::new(AnalysisHandler::new(
        ProviderClient::builder().build()?,
        config,
    ));
    let app = router(handler);

    let addr: SocketAddr = std::env::var(ADDR_ENV)
        .ok()
        .as_deref()
        .unwrap_or(DEFAULT_ADDR)
        .parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, route = ROUTE, "watchlist-proxy listening");

    axum::serve(listener, app).await?;
    Ok(())
}
