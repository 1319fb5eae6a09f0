//! Mock configurations for test fixtures.
//!
//! Re-exports the doubles from `trivia_dash::adapters::mock` and adds a
//! builder for scripting them.

pub use trivia_dash::adapters::mock::{MockHttpClient, MockResponse, RecordingDelay};
pub use trivia_dash::traits::{HttpError, Response};

use std::sync::Arc;

use trivia_dash::api::TriviaClient;

/// Fluent setup for a [`MockHttpClient`].
pub struct MockHttpConfig {
    base_url: String,
    client: MockHttpClient,
}

impl MockHttpConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: MockHttpClient::new(),
        }
    }

    /// Serve `json` with `status` for the category endpoint.
    pub fn with_categories(self, status: u16, json: &str) -> Self {
        self.client.set_response(
            &format!("{}/api_category.php", self.base_url),
            MockResponse::json(status, json),
        );
        self
    }

    /// Serve `json` with `status` for every questions request.
    pub fn with_questions(self, status: u16, json: &str) -> Self {
        self.client.set_response(
            &format!("{}/api.php", self.base_url),
            MockResponse::json(status, json),
        );
        self
    }

    /// Serve a sequence for the questions endpoint; the last entry repeats.
    pub fn with_question_sequence(self, sequence: Vec<MockResponse>) -> Self {
        self.client
            .set_sequence(&format!("{}/api.php", self.base_url), sequence);
        self
    }

    /// Fail every request at the transport level.
    pub fn with_transport_error(self, error: HttpError) -> Self {
        self.client.set_default_response(MockResponse::Error(error));
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }

    /// Build a [`TriviaClient`] over the mock, plus the delay recorder.
    pub fn build_client(self) -> (TriviaClient, MockHttpClient, RecordingDelay) {
        let delay = RecordingDelay::new();
        let client = TriviaClient::with_url(&self.base_url)
            .with_http(Arc::new(self.client.clone()))
            .with_delay(Arc::new(delay.clone()));
        (client, self.client, delay)
    }
}
