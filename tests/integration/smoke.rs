//! Integration tests for the API smoke check

use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use xausignal::smoke::smoke_test_api;

#[tokio::test]
async fn api_smoke_passes_on_signal_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/signal/xauusd"))
        .and(body_string_contains("d1_probs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "instrument": "XAUUSD",
            "signal": "NEUTRAL",
            "confidence": 0.59
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = smoke_test_api(&format!("{}/", server.uri()), 2300.0).await;
    assert!(result.ok, "{}", result.detail);
    assert_eq!(result.detail, "API OK: NEUTRAL");
}

#[tokio::test]
async fn api_smoke_fails_on_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/signal/xauusd"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = smoke_test_api(&server.uri(), 2300.0).await;
    assert!(!result.ok);
    assert_eq!(result.detail, "HTTP 500");
}

#[tokio::test]
async fn api_smoke_fails_without_signal_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/signal/xauusd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .mount(&server)
        .await;

    let result = smoke_test_api(&server.uri(), 2300.0).await;
    assert!(!result.ok);
}

#[tokio::test]
async fn api_smoke_fails_when_unreachable() {
    let result = smoke_test_api("http://127.0.0.1:9", 2300.0).await;
    assert!(!result.ok);
    assert!(result.detail.starts_with("request failed"));
}
