//! Retry and error classification against a live mock server
//!
//! Waits go through a recording sleeper, so the schedules are checked
//! exactly without the tests actually sleeping.

mod common;

use std::time::Duration;

use assert_matches::assert_matches;
use steamwebapi::{ApiErrorKind, Error, ItemRequest};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn secs(values: &[u64]) -> Vec<Duration> {
    values.iter().copied().map(Duration::from_secs).collect()
}

#[tokio::test]
async fn test_server_errors_then_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account/me"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .expect(2)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/account/me"))
        .respond_with(common::json_fixture(200, "account_me"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (client, sleeper) = common::mock_client(&mock_server.uri());
    let raw = client.account().with_raw_response().me().await.unwrap();

    assert_eq!(raw.attempts(), 3);
    assert_eq!(sleeper.recorded(), secs(&[1, 3]));
    mock_server.verify().await;
}

#[tokio::test]
async fn test_server_errors_exhaust_attempts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account/me"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({"error": "internal", "message": "try later"})),
        )
        .expect(5)
        .mount(&mock_server)
        .await;

    let (client, sleeper) = common::mock_client(&mock_server.uri());
    let error = client.account().me().await.unwrap_err();

    assert_eq!(error.api_kind(), Some(ApiErrorKind::ServerError));
    assert_eq!(error.status(), Some(500));
    assert_eq!(error.payload().unwrap().message, "try later");
    assert_eq!(sleeper.recorded(), secs(&[1, 3, 5, 7]));
    assert_eq!(sleeper.total(), Duration::from_secs(16));
    mock_server.verify().await;
}

#[tokio::test]
async fn test_not_found_fails_fast() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/steam/api/item"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"error": "Not Found", "message": "Item not found"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let (client, sleeper) = common::mock_client(&mock_server.uri());
    let request = ItemRequest::builder()
        .market_hash_name("Nonexistent Item")
        .build()
        .unwrap();
    let error = client.steam().item(request).await.unwrap_err();

    assert_matches!(
        &error,
        Error::Api { kind: ApiErrorKind::NotFound, payload } if payload.error == "Not Found"
    );
    assert!(!error.is_retryable());
    assert!(sleeper.recorded().is_empty());
    mock_server.verify().await;
}

#[tokio::test]
async fn test_unauthenticated_text_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account/me"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (client, _) = common::mock_client(&mock_server.uri());
    let error = client.account().me().await.unwrap_err();

    assert_matches!(
        error,
        Error::Api { kind: ApiErrorKind::NotAuthenticated, payload }
            if payload.error == "invalid api key" && payload.message == "invalid api key"
    );
}

#[tokio::test]
async fn test_rate_limit_waits_reset_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/currency/api/list"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("X-Ratelimit-Reset", "10")
                .insert_header("X-Ratelimit-Remaining", "0"),
        )
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/currency/api/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(["USD"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (client, sleeper) = common::mock_client(&mock_server.uri());
    let symbols = client.currency().list().await.unwrap();

    assert_eq!(symbols, vec!["USD"]);
    assert_eq!(sleeper.recorded(), secs(&[10]));
    mock_server.verify().await;
}

#[tokio::test]
async fn test_rate_limit_falls_back_to_retry_after() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/currency/api/list"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "3"))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/currency/api/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(["USD"])))
        .mount(&mock_server)
        .await;

    let (client, sleeper) = common::mock_client(&mock_server.uri());
    client.currency().list().await.unwrap();

    assert_eq!(sleeper.recorded(), secs(&[3]));
}

#[tokio::test]
async fn test_rate_limit_over_ceiling_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/currency/api/list"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("X-Ratelimit-Reset", "40")
                .set_body_json(serde_json::json!({"error": "Too Many Requests", "message": "slow down"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let (client, sleeper) = common::mock_client(&mock_server.uri());
    let error = client.currency().list().await.unwrap_err();

    assert_eq!(error.api_kind(), Some(ApiErrorKind::RateLimited));
    assert_eq!(error.status(), Some(429));
    assert!(sleeper.recorded().is_empty());
    mock_server.verify().await;
}

#[tokio::test]
async fn test_rate_limit_waits_do_not_consume_server_budget() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account/me"))
        .respond_with(ResponseTemplate::new(429).insert_header("X-Ratelimit-Reset", "2"))
        .up_to_n_times(6)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/account/me"))
        .respond_with(common::json_fixture(200, "account_me"))
        .mount(&mock_server)
        .await;

    let (client, sleeper) = common::mock_client(&mock_server.uri());
    let raw = client.account().with_raw_response().me().await.unwrap();

    assert_eq!(raw.attempts(), 7);
    assert_eq!(sleeper.recorded(), secs(&[2, 2, 2, 2, 2, 2]));
}

#[tokio::test]
async fn test_payment_required_is_unhandled() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account/me"))
        .respond_with(ResponseTemplate::new(402).set_body_string("subscription expired"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (client, _) = common::mock_client(&mock_server.uri());
    let error = client.account().me().await.unwrap_err();

    assert_eq!(error.api_kind(), Some(ApiErrorKind::Unhandled));
    assert_eq!(error.status(), Some(402));
}

#[tokio::test]
async fn test_connection_refused_is_not_retried() {
    let (client, sleeper) = common::mock_client("http://127.0.0.1:1");
    let error = client.account().me().await.unwrap_err();

    assert_matches!(error, Error::Connection(_) | Error::Transport(_) | Error::Timeout);
    assert!(sleeper.recorded().is_empty());
}
