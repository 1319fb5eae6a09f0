//! Common test utilities for integration tests.
//!
//! Fixtures shaped like Open Trivia DB responses, plus helpers to serve
//! them from a wiremock server or a [`MockHttpConfig`].
//!
//! # Example
//!
//! ```ignore
//! let server = MockServer::start().await;
//! mount_trivia(&server, CATEGORIES_JSON, &questions_json(&sample_questions())).await;
//! let client = wiremock_client(&server);
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;

use serde_json::json;
use trivia_dash::adapters::ReqwestHttpClient;
use trivia_dash::api::TriviaClient;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Category list with entity-encoded names, as the API sends them.
pub const CATEGORIES_JSON: &str = r#"{"trivia_categories":[
    {"id":9,"name":"General Knowledge"},
    {"id":17,"name":"Science &amp; Nature"},
    {"id":23,"name":"History"}
]}"#;

/// `(category, difficulty, question)` rows for [`questions_json`].
pub fn sample_questions() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("Science &amp; Nature", "hard", "What is H&#039;s symbol?"),
        ("History", "easy", "Who was &quot;Honest Abe&quot;?"),
        ("Science &amp; Nature", "easy", "Is water wet?"),
        ("History", "medium", "When did Rome fall?"),
    ]
}

/// A `response_code: 0` questions body built from `rows`.
pub fn questions_json(rows: &[(&str, &str, &str)]) -> String {
    let results: Vec<_> = rows
        .iter()
        .map(|(category, difficulty, question)| {
            json!({
                "type": "multiple",
                "difficulty": difficulty,
                "category": category,
                "question": question,
                "correct_answer": "A",
                "incorrect_answers": ["B", "C", "D"],
            })
        })
        .collect();

    json!({ "response_code": 0, "results": results }).to_string()
}

/// Serve both endpoints from `server`.
pub async fn mount_trivia(server: &MockServer, categories: &str, questions: &str) {
    Mock::given(method("GET"))
        .and(path("/api_category.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string(categories))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string(questions))
        .mount(server)
        .await;
}

/// Real reqwest transport against `server`, with backoff waits recorded
/// instead of slept.
pub fn wiremock_client(server: &MockServer) -> (TriviaClient, RecordingDelay) {
    let delay = RecordingDelay::new();
    let client = TriviaClient::with_url(&server.uri())
        .with_http(Arc::new(ReqwestHttpClient::new()))
        .with_delay(Arc::new(delay.clone()));
    (client, delay)
}
