//! HTTP GET with bounded exponential backoff.
//!
//! The trivia API answers 429 or 503 when it is busy. Those two statuses are
//! retried up to [`RetryPolicy::max_retries`] times, waiting
//! `base_delay * 2^attempt` between attempts (600ms, 1200ms, 2400ms with the
//! defaults). There is no jitter. Any other non-2xx status, and any
//! transport error, fails immediately.

use std::time::Duration;

use crate::error::{ErrorCategory, FetchError};
use crate::traits::{Delay, Headers, HttpClient, Response};

/// Default number of retries after the first attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default wait before the first retry.
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(600);

/// Backoff parameters for [`fetch_with_retry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries allowed after the first attempt.
    pub max_retries: u32,
    /// Wait before the first retry; doubled for each later retry.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            base_delay: DEFAULT_BASE_DELAY,
        }
    }
}

impl RetryPolicy {
    /// Set the number of retries.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the base delay.
    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    /// Wait before retry number `attempt` (0-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay
            .saturating_mul(2u32.saturating_pow(attempt))
    }

    /// Whether a response with `status` should be retried after `attempt`
    /// retries have already happened.
    pub fn should_retry(&self, status: u16, attempt: u32) -> bool {
        ErrorCategory::from_status(status).is_retryable() && attempt < self.max_retries
    }
}

/// GET `url`, retrying server-busy responses.
///
/// Returns the first 2xx response. Fails with
/// [`FetchError::RequestFailed`] carrying the final status otherwise.
pub async fn fetch_with_retry<C, D>(
    client: &C,
    delay: &D,
    policy: &RetryPolicy,
    url: &str,
) -> Result<Response, FetchError>
where
    C: HttpClient + ?Sized,
    D: Delay + ?Sized,
{
    let headers = Headers::new();
    let mut attempt: u32 = 0;

    loop {
        let response = client.get(url, &headers).await?;
        if response.is_success() {
            if attempt > 0 {
                tracing::debug!(url, retries = attempt, "request succeeded after retry");
            }
            return Ok(response);
        }

        if policy.should_retry(response.status, attempt) {
            let wait = policy.delay_for(attempt);
            tracing::warn!(
                url,
                status = response.status,
                wait_ms = wait.as_millis() as u64,
                "server busy, backing off"
            );
            delay.sleep(wait).await;
            attempt += 1;
            continue;
        }

        tracing::warn!(url, status = response.status, retries = attempt, "request failed");
        return Err(FetchError::RequestFailed {
            status: response.status,
            attempts: attempt + 1,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse, RecordingDelay};
    use crate::traits::HttpError;

    const URL: &str = "https://opentdb.com/api.php?amount=50";

    #[test]
    fn test_delay_doubles() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_for(0), Duration::from_millis(600));
        assert_eq!(policy.delay_for(1), Duration::from_millis(1200));
        assert_eq!(policy.delay_for(2), Duration::from_millis(2400));
    }

    #[test]
    fn test_should_retry() {
        let policy = RetryPolicy::default();
        assert!(policy.should_retry(429, 0));
        assert!(policy.should_retry(503, 2));
        assert!(!policy.should_retry(503, 3));
        assert!(!policy.should_retry(500, 0));
        assert!(!policy.should_retry(404, 0));
    }

    #[tokio::test]
    async fn test_succeeds_first_try_without_waiting() {
        let client = MockHttpClient::new();
        client.set_response(URL, MockResponse::json(200, "{}"));
        let delay = RecordingDelay::new();

        let response = fetch_with_retry(&client, &delay, &RetryPolicy::default(), URL)
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert!(delay.waits().is_empty());
        assert_eq!(client.get_requests().len(), 1);
    }

    #[tokio::test]
    async fn test_two_busy_responses_then_success() {
        let client = MockHttpClient::new();
        client.set_sequence(
            URL,
            vec![
                MockResponse::status(503),
                MockResponse::status(503),
                MockResponse::json(200, "{}"),
            ],
        );
        let delay = RecordingDelay::new();

        let response = fetch_with_retry(&client, &delay, &RetryPolicy::default(), URL)
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(
            delay.waits(),
            vec![Duration::from_millis(600), Duration::from_millis(1200)]
        );
        assert_eq!(client.get_requests().len(), 3);
    }

    #[tokio::test]
    async fn test_always_rate_limited_gives_up_after_three_retries() {
        let client = MockHttpClient::new();
        client.set_response(URL, MockResponse::status(429));
        let delay = RecordingDelay::new();

        let err = fetch_with_retry(&client, &delay, &RetryPolicy::default(), URL)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            FetchError::RequestFailed {
                status: 429,
                attempts: 4
            }
        );
        assert_eq!(client.get_requests().len(), 4);
        assert_eq!(
            delay.waits(),
            vec![
                Duration::from_millis(600),
                Duration::from_millis(1200),
                Duration::from_millis(2400)
            ]
        );
    }

    #[tokio::test]
    async fn test_other_status_is_terminal() {
        let client = MockHttpClient::new();
        client.set_response(URL, MockResponse::status(500));
        let delay = RecordingDelay::new();

        let err = fetch_with_retry(&client, &delay, &RetryPolicy::default(), URL)
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(500));
        assert!(delay.waits().is_empty());
        assert_eq!(client.get_requests().len(), 1);
    }

    #[tokio::test]
    async fn test_transport_error_not_retried() {
        let client = MockHttpClient::new();
        client.set_response(
            URL,
            MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
        );
        let delay = RecordingDelay::new();

        let err = fetch_with_retry(&client, &delay, &RetryPolicy::default(), URL)
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Transport(HttpError::ConnectionFailed(_))));
        assert_eq!(client.get_requests().len(), 1);
    }

    #[tokio::test]
    async fn test_custom_policy() {
        let client = MockHttpClient::new();
        client.set_response(URL, MockResponse::status(503));
        let delay = RecordingDelay::new();
        let policy = RetryPolicy::default()
            .with_max_retries(1)
            .with_base_delay(Duration::from_millis(10));

        let err = fetch_with_retry(&client, &delay, &policy, URL)
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(503));
        assert_eq!(delay.waits(), vec![Duration::from_millis(10)]);
    }
}
