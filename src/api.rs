//! Open Trivia DB API client.
//!
//! A load fetches the category list and a batch of questions concurrently,
//! waits for both, checks the questions' `response_code`, and entity-decodes
//! every textual field before handing the data to the store.

use std::fmt;
use std::sync::Arc;

use crate::adapters::{ReqwestHttpClient, TokioDelay};
use crate::error::{TriviaError, TriviaResult};
use crate::fetch::{fetch_with_retry, RetryPolicy};
use crate::models::{Category, CategoryListResponse, Question, QuestionListResponse};
use crate::traits::{Delay, HttpClient};

pub const DEFAULT_BASE_URL: &str = "https://opentdb.com";

/// The two endpoints a load touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Categories,
    Questions,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Categories => "categories",
            Endpoint::Questions => "questions",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded result of a successful load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriviaData {
    pub categories: Vec<Category>,
    pub questions: Vec<Question>,
}

/// Client for the trivia API.
#[derive(Clone)]
pub struct TriviaClient {
    /// Base URL without trailing slash
    pub base_url: String,
    http: Arc<dyn HttpClient>,
    delay: Arc<dyn Delay>,
    policy: RetryPolicy,
}

impl fmt::Debug for TriviaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriviaClient")
            .field("base_url", &self.base_url)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl Default for TriviaClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TriviaClient {
    /// Create a client for the public Open Trivia DB.
    pub fn new() -> Self {
        Self::with_url(DEFAULT_BASE_URL)
    }

    /// Create a client for another base URL (mirrors, tests).
    pub fn with_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Arc::new(ReqwestHttpClient::new()),
            delay: Arc::new(TokioDelay),
            policy: RetryPolicy::default(),
        }
    }

    /// Replace the HTTP transport.
    pub fn with_http(mut self, http: Arc<dyn HttpClient>) -> Self {
        self.http = http;
        self
    }

    /// Replace the backoff timer.
    pub fn with_delay(mut self, delay: Arc<dyn Delay>) -> Self {
        self.delay = delay;
        self
    }

    /// Replace the retry policy.
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub fn categories_url(&self) -> String {
        format!("{}/api_category.php", self.base_url)
    }

    pub fn questions_url(&self, amount: u32) -> String {
        format!("{}/api.php?amount={}", self.base_url, amount)
    }

    /// Fetch and decode the category list.
    pub async fn fetch_categories(&self) -> TriviaResult<Vec<Category>> {
        let url = self.categories_url();
        let response = fetch_with_retry(self.http.as_ref(), self.delay.as_ref(), &self.policy, &url)
            .await
            .map_err(|source| TriviaError::Fetch {
                endpoint: Endpoint::Categories,
                source,
            })?;

        let body: CategoryListResponse = response
            .json()
            .map_err(|e| TriviaError::decode(Endpoint::Categories, e))?;

        Ok(body
            .trivia_categories
            .into_iter()
            .map(Category::decoded)
            .collect())
    }

    /// Fetch and decode a batch of `amount` questions.
    pub async fn fetch_questions(&self, amount: u32) -> TriviaResult<Vec<Question>> {
        let url = self.questions_url(amount);
        let response = fetch_with_retry(self.http.as_ref(), self.delay.as_ref(), &self.policy, &url)
            .await
            .map_err(|source| TriviaError::Fetch {
                endpoint: Endpoint::Questions,
                source,
            })?;

        let body: QuestionListResponse = response
            .json()
            .map_err(|e| TriviaError::decode(Endpoint::Questions, e))?;

        if body.response_code != 0 {
            return Err(TriviaError::ApiResponseCode {
                code: body.response_code,
            });
        }

        let questions = body
            .questions()
            .map_err(|e| TriviaError::decode(Endpoint::Questions, e))?;

        Ok(questions.into_iter().map(Question::decoded).collect())
    }

    /// Fetch categories and questions concurrently.
    ///
    /// Both requests always run to completion. Either failing fails the
    /// whole load; a category failure is reported first.
    pub async fn load(&self, amount: u32) -> TriviaResult<TriviaData> {
        tracing::debug!(amount, base_url = %self.base_url, "loading trivia data");

        let (categories, questions) =
            tokio::join!(self.fetch_categories(), self.fetch_questions(amount));

        Ok(TriviaData {
            categories: categories?,
            questions: questions?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse, RecordingDelay};
    use crate::error::{ErrorCategory, FetchError};
    use crate::models::Difficulty;
    use std::time::Duration;

    const BASE: &str = "https://trivia.test";

    const CATEGORIES: &str =
        r#"{"trivia_categories":[{"id":17,"name":"Science &amp; Nature"}]}"#;

    const QUESTIONS: &str = r#"{"response_code":0,"results":[{"type":"multiple","difficulty":"hard","category":"Science &amp; Nature","question":"Q&#039;s","correct_answer":"A","incorrect_answers":["B &lt; C"]}]}"#;

    fn client(http: &MockHttpClient, delay: &RecordingDelay) -> TriviaClient {
        TriviaClient::with_url(BASE)
            .with_http(Arc::new(http.clone()))
            .with_delay(Arc::new(delay.clone()))
    }

    #[test]
    fn test_urls() {
        let client = TriviaClient::with_url("https://trivia.test/");
        assert_eq!(client.categories_url(), "https://trivia.test/api_category.php");
        assert_eq!(client.questions_url(50), "https://trivia.test/api.php?amount=50");
    }

    #[tokio::test]
    async fn test_load_decodes_everything() {
        let http = MockHttpClient::new();
        http.set_response(&format!("{BASE}/api_category.php"), MockResponse::json(200, CATEGORIES));
        http.set_response(&format!("{BASE}/api.php"), MockResponse::json(200, QUESTIONS));
        let delay = RecordingDelay::new();

        let data = client(&http, &delay).load(50).await.unwrap();

        assert_eq!(data.categories, vec![Category::new(17, "Science & Nature")]);
        assert_eq!(data.questions.len(), 1);
        let q = &data.questions[0];
        assert_eq!(q.category, "Science & Nature");
        assert_eq!(q.question, "Q's");
        assert_eq!(q.incorrect_answers, vec!["B < C"]);
        assert_eq!(q.difficulty, Difficulty::Hard);

        let urls: Vec<String> = http.get_requests().into_iter().map(|r| r.url).collect();
        assert!(urls.contains(&format!("{BASE}/api.php?amount=50")));
        assert!(urls.contains(&format!("{BASE}/api_category.php")));
    }

    #[tokio::test]
    async fn test_non_zero_response_code_fails() {
        let http = MockHttpClient::new();
        http.set_response(&format!("{BASE}/api_category.php"), MockResponse::json(200, CATEGORIES));
        http.set_response(
            &format!("{BASE}/api.php"),
            MockResponse::json(200, r#"{"response_code":1,"results":[]}"#),
        );
        let delay = RecordingDelay::new();

        let err = client(&http, &delay).load(50).await.unwrap_err();
        assert_eq!(err, TriviaError::ApiResponseCode { code: 1 });
        assert_eq!(err.category(), ErrorCategory::ApiLogic);
    }

    #[tokio::test]
    async fn test_response_code_checked_before_results_shape() {
        let http = MockHttpClient::new();
        http.set_response(
            &format!("{BASE}/api.php"),
            MockResponse::json(200, r#"{"response_code":1,"results":[{"bogus":1}]}"#),
        );
        let delay = RecordingDelay::new();

        let err = client(&http, &delay).fetch_questions(50).await.unwrap_err();
        assert_eq!(err, TriviaError::ApiResponseCode { code: 1 });
    }

    #[tokio::test]
    async fn test_malformed_results_on_success_is_decode_error() {
        let http = MockHttpClient::new();
        http.set_response(
            &format!("{BASE}/api.php"),
            MockResponse::json(200, r#"{"response_code":0,"results":[{"bogus":1}]}"#),
        );
        let delay = RecordingDelay::new();

        let err = client(&http, &delay).fetch_questions(50).await.unwrap_err();
        assert!(matches!(
            err,
            TriviaError::Decode {
                endpoint: Endpoint::Questions,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_category_failure_fails_load_but_both_requests_run() {
        let http = MockHttpClient::new();
        http.set_response(&format!("{BASE}/api_category.php"), MockResponse::status(404));
        http.set_response(&format!("{BASE}/api.php"), MockResponse::json(200, QUESTIONS));
        let delay = RecordingDelay::new();

        let err = client(&http, &delay).load(10).await.unwrap_err();
        assert_eq!(
            err,
            TriviaError::Fetch {
                endpoint: Endpoint::Categories,
                source: FetchError::RequestFailed {
                    status: 404,
                    attempts: 1
                },
            }
        );
        assert_eq!(http.request_count(&format!("{BASE}/api.php")), 1);
    }

    #[tokio::test]
    async fn test_busy_questions_endpoint_is_retried() {
        let http = MockHttpClient::new();
        http.set_response(&format!("{BASE}/api_category.php"), MockResponse::json(200, CATEGORIES));
        http.set_sequence(
            &format!("{BASE}/api.php"),
            vec![
                MockResponse::status(503),
                MockResponse::status(503),
                MockResponse::json(200, QUESTIONS),
            ],
        );
        let delay = RecordingDelay::new();

        let data = client(&http, &delay).load(50).await.unwrap();
        assert_eq!(data.questions.len(), 1);
        assert_eq!(
            delay.waits(),
            vec![Duration::from_millis(600), Duration::from_millis(1200)]
        );
    }

    #[tokio::test]
    async fn test_malformed_json_is_decode_error() {
        let http = MockHttpClient::new();
        http.set_response(&format!("{BASE}/api_category.php"), MockResponse::json(200, "<html>"));
        http.set_response(&format!("{BASE}/api.php"), MockResponse::json(200, QUESTIONS));
        let delay = RecordingDelay::new();

        let err = client(&http, &delay).load(50).await.unwrap_err();
        assert!(matches!(
            err,
            TriviaError::Decode {
                endpoint: Endpoint::Categories,
                ..
            }
        ));
        assert_eq!(err.category(), ErrorCategory::Unknown);
    }
}
