//! Retry fetcher against a real HTTP server (wiremock) through reqwest.

mod common;

use std::time::Duration;

use common::RecordingDelay;
use trivia_dash::adapters::ReqwestHttpClient;
use trivia_dash::error::FetchError;
use trivia_dash::fetch::{fetch_with_retry, RetryPolicy};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ms(values: &[u64]) -> Vec<Duration> {
    values.iter().copied().map(Duration::from_millis).collect()
}

#[tokio::test]
async fn test_503_twice_then_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api.php"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .with_priority(1)
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let http = ReqwestHttpClient::new();
    let delay = RecordingDelay::new();
    let url = format!("{}/api.php?amount=5", server.uri());

    let response = fetch_with_retry(&http, &delay, &RetryPolicy::default(), &url)
        .await
        .expect("third attempt succeeds");

    assert_eq!(response.status, 200);
    assert_eq!(response.text().unwrap(), "ok");
    assert_eq!(delay.waits(), ms(&[600, 1200]));
}

#[tokio::test]
async fn test_always_429_gives_up_after_four_requests() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .expect(4)
        .mount(&server)
        .await;

    let http = ReqwestHttpClient::new();
    let delay = RecordingDelay::new();
    let url = format!("{}/api_category.php", server.uri());

    let err = fetch_with_retry(&http, &delay, &RetryPolicy::default(), &url)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        FetchError::RequestFailed {
            status: 429,
            attempts: 4
        }
    );
    assert_eq!(err.to_string(), "Request failed: 429");
    assert_eq!(delay.waits(), ms(&[600, 1200, 2400]));
}

#[tokio::test]
async fn test_404_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let http = ReqwestHttpClient::new();
    let delay = RecordingDelay::new();
    let url = format!("{}/api.php", server.uri());

    let err = fetch_with_retry(&http, &delay, &RetryPolicy::default(), &url)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert!(delay.waits().is_empty());
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let http = ReqwestHttpClient::with_timeout(Duration::from_millis(50));
    let delay = RecordingDelay::new();
    let url = format!("{}/api.php", server.uri());

    let err = fetch_with_retry(&http, &delay, &RetryPolicy::default(), &url)
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Transport(_)), "got {:?}", err);
    assert_eq!(err.status(), None);
    assert!(delay.waits().is_empty());
}
