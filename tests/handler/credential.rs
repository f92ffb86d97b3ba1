use reqwest::{Method, StatusCode};
use serde_json::json;
use watchlist_proxy::{AnalysisHandler, AnalysisRequest, HandlerConfig, ProviderResponse};

use crate::common::{self, CountingService};

#[tokio::test]
async fn missing_api_key_answers_500_without_calling_provider() {
    let server = common::setup_server();
    let mock = common::mock_any_query(&server);

    for config in [HandlerConfig::new(None), HandlerConfig::new(Some(String::new()))] {
        let handler = AnalysisHandler::new(common::client_for(&server), config);

        let resp = handler.handle(&AnalysisRequest::post("AAPL")).await;

        assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            resp.body_json(),
            Some(json!({ "error": "API key not configured on server" }))
        );
    }

    mock.assert_calls(0);
}

#[tokio::test]
async fn missing_api_key_never_reaches_the_service() {
    let service = CountingService::new(|| Ok(ProviderResponse::default()));
    let handler = AnalysisHandler::new(service, HandlerConfig::default());

    let resp = handler.handle(&AnalysisRequest::post("AAPL")).await;

    assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(handler.service().calls(), 0);
}

#[tokio::test]
async fn api_key_never_appears_in_a_response_body() {
    let bodies: [(u16, String); 5] = [
        (200, common::feed_with(&[("AAPL", "Bullish", json!("0.85"))])),
        (200, json!({ "feed": [] }).to_string()),
        (200, common::fixture("news_sentiment", "note", "json")),
        (200, "not json".to_string()),
        (500, "boom".to_string()),
    ];

    for (status, body) in bodies {
        let server = common::setup_server();
        let _mock = server.mock(|when, then| {
            when.path("/query");
            then.status(status)
                .header("content-type", "application/json")
                .body(body);
        });
        let handler = common::handler_for(&server);

        for req in [
            AnalysisRequest::post("AAPL"),
            AnalysisRequest::new(Method::POST, None),
            AnalysisRequest::new(Method::GET, None),
        ] {
            let resp = handler.handle(&req).await;
            let rendered = resp
                .body_json()
                .map(|v| v.to_string())
                .unwrap_or_default();
            assert!(
                !rendered.contains(common::API_KEY),
                "key leaked with status {}: {rendered}",
                resp.status
            );
        }
    }
}

#[test]
fn config_debug_redacts_api_key() {
    let config = HandlerConfig::new(Some(common::API_KEY.to_string()));
    let rendered = format!("{config:?}");

    assert!(config.has_api_key());
    assert!(!rendered.contains(common::API_KEY));
    assert!(rendered.contains("redacted"));
}
