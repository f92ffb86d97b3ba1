//! axum hosting for the sentiment lookup handler.
//!
//! Serves [`ROUTE`]. Every method is routed to the handler so the 405 answer
//! comes from the handler itself.

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderValue, Method, header},
    response::{IntoResponse, Response},
    routing::any,
};

use crate::{AnalysisHandler, AnalysisRequest, HandlerResponse, SentimentService};

/// Path the handler is mounted at.
pub const ROUTE: &str = "/api/getAiAnalysis";

/// Build the router for `handler`.
pub fn router<S>(handler: Arc<AnalysisHandler<S>>) -> Router
where
    S: SentimentService + 'static,
{
    Router::new().route(ROUTE, any(analyze::<S>)).with_state(handler)
}

async fn analyze<S>(
    State(handler): State<Arc<AnalysisHandler<S>>>,
    method: Method,
    body: Bytes,
) -> Response
where
    S: SentimentService + 'static,
{
    // A body that is not JSON is treated like a missing one.
    let body = serde_json::from_slice::<serde_json::Value>(&body).ok();
    let resp = handler.handle(&AnalysisRequest::new(method, body)).await;
    into_http(resp)
}

/// Render a [`HandlerResponse`] as an HTTP response, `Allow` header included.
pub fn into_http(resp: HandlerResponse) -> Response {
    let mut out = match resp.body {
        Some(body) => (resp.status, Json(body)).into_response(),
        None => resp.status.into_response(),
    };
    if let Some(allow) = resp.allow
        && let Ok(value) = HeaderValue::from_str(allow.as_str())
    {
        out.headers_mut().insert(header::ALLOW, value);
    }
    out
}
