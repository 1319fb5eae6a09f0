//! The trivia data store.
//!
//! Owns the fetched data, the selected category and the load status. A load
//! is split in two so the UI task can keep rendering while the network runs:
//! [`TriviaStore::begin_load`] hands out a [`LoadTicket`], the fetch runs
//! elsewhere, and [`TriviaStore::finish_load`] applies the outcome.
//!
//! Overlapping loads: every ticket carries a request id from a monotonically
//! increasing counter. Only the result for the most recently issued ticket
//! is applied; older results are dropped as stale. The latest request wins
//! regardless of the order responses arrive in.

use chrono::{DateTime, Local};

use super::derived::{self, Bucket, CategoryFilter};
use crate::api::{TriviaClient, TriviaData};
use crate::error::{ErrorCategory, TriviaResult};
use crate::models::{Category, Difficulty, Question};

/// Questions requested on startup and by a plain refetch.
pub const DEFAULT_AMOUNT: u32 = 50;

/// Largest batch the trivia API serves in one request.
pub const MAX_AMOUNT: u32 = 50;

/// Handle for one in-flight load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub request_id: u64,
    pub amount: u32,
}

/// What [`TriviaStore::finish_load`] did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Data replaced
    Applied,
    /// Error recorded, data kept
    Failed,
    /// A newer load was issued; result ignored
    Stale,
}

/// Single owned store for the dashboard session.
#[derive(Debug, Clone)]
pub struct TriviaStore {
    categories: Vec<Category>,
    questions: Vec<Question>,
    selected: CategoryFilter,
    loading: bool,
    error: Option<String>,
    error_category: Option<ErrorCategory>,
    latest_request: u64,
    last_loaded_at: Option<DateTime<Local>>,
}

impl Default for TriviaStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TriviaStore {
    /// Create an empty store in the loading state.
    ///
    /// The owner is expected to start the initial load right away.
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            questions: Vec::new(),
            selected: CategoryFilter::All,
            loading: true,
            error: None,
            error_category: None,
            latest_request: 0,
            last_loaded_at: None,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn selected_category(&self) -> &CategoryFilter {
        &self.selected
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Classification of the current error, if any.
    pub fn error_category(&self) -> Option<ErrorCategory> {
        self.error_category
    }

    /// When data was last replaced by a successful load.
    pub fn last_loaded_at(&self) -> Option<DateTime<Local>> {
        self.last_loaded_at
    }

    /// Id of the most recently issued load, 0 if none.
    pub fn latest_request_id(&self) -> u64 {
        self.latest_request
    }

    /// Select a category by selector value (`"all"` clears the filter).
    ///
    /// No reset happens if the name matches nothing; views just go empty.
    pub fn set_selected_category(&mut self, name: &str) {
        let filter = CategoryFilter::parse(name);
        if filter != self.selected {
            tracing::debug!(filter = %filter, "category filter changed");
        }
        self.selected = filter;
    }

    /// Mark a load as started and issue its ticket.
    pub fn begin_load(&mut self, amount: u32) -> LoadTicket {
        self.latest_request += 1;
        self.loading = true;
        self.error = None;
        self.error_category = None;
        tracing::debug!(request_id = self.latest_request, amount, "load started");
        LoadTicket {
            request_id: self.latest_request,
            amount,
        }
    }

    /// Apply the result of the load identified by `ticket`.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: TriviaResult<TriviaData>) -> LoadOutcome {
        if ticket.request_id != self.latest_request {
            tracing::debug!(
                request_id = ticket.request_id,
                latest = self.latest_request,
                "dropping stale load result"
            );
            return LoadOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(data) => {
                tracing::info!(
                    categories = data.categories.len(),
                    questions = data.questions.len(),
                    "trivia data loaded"
                );
                self.categories = data.categories;
                self.questions = data.questions;
                self.last_loaded_at = Some(Local::now());
                LoadOutcome::Applied
            }
            Err(err) => {
                tracing::warn!(
                    code = err.error_code(),
                    category = %err.category(),
                    "load failed: {}",
                    err
                );
                self.error = Some(err.user_message());
                self.error_category = Some(err.category());
                LoadOutcome::Failed
            }
        }
    }

    /// Run a whole load cycle against `client`.
    pub async fn load(&mut self, client: &TriviaClient, amount: u32) -> LoadOutcome {
        let ticket = self.begin_load(amount);
        let result = client.load(amount).await;
        self.finish_load(ticket, result)
    }

    /// Replace the stored questions with a fresh batch of `amount`.
    pub async fn refetch_questions(&mut self, client: &TriviaClient, amount: u32) -> LoadOutcome {
        self.load(client, amount).await
    }

    pub fn visible_questions(&self) -> Vec<&Question> {
        derived::visible_questions(&self.questions, &self.selected)
    }

    pub fn category_distribution(&self) -> Vec<Bucket<String>> {
        derived::category_distribution(&self.visible_questions())
    }

    pub fn difficulty_distribution(&self) -> [Bucket<Difficulty>; 3] {
        derived::difficulty_distribution(&self.visible_questions())
    }

    pub fn unique_question_categories(&self) -> Vec<String> {
        derived::unique_question_categories(&self.questions)
    }

    /// Selector values: `"all"` followed by the sorted question categories.
    pub fn filter_options(&self) -> Vec<String> {
        std::iter::once(derived::ALL_CATEGORIES.to_string())
            .chain(self.unique_question_categories())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse, RecordingDelay};
    use crate::error::TriviaError;
    use crate::models::QuestionType;
    use std::sync::Arc;

    const BASE: &str = "https://trivia.test";

    fn question(category: &str, difficulty: Difficulty) -> Question {
        Question {
            category: category.to_string(),
            question_type: QuestionType::Boolean,
            difficulty,
            question: "q".to_string(),
            correct_answer: "True".to_string(),
            incorrect_answers: vec!["False".to_string()],
        }
    }

    fn data(questions: Vec<Question>) -> TriviaData {
        TriviaData {
            categories: vec![Category::new(1, "Art")],
            questions,
        }
    }

    fn mock_client(http: &MockHttpClient) -> TriviaClient {
        TriviaClient::with_url(BASE)
            .with_http(Arc::new(http.clone()))
            .with_delay(Arc::new(RecordingDelay::new()))
    }

    #[test]
    fn test_new_store_is_loading_with_all_filter() {
        let store = TriviaStore::new();
        assert!(store.is_loading());
        assert!(store.error().is_none());
        assert!(store.selected_category().is_all());
        assert!(store.questions().is_empty());
    }

    #[test]
    fn test_successful_load_replaces_data() {
        let mut store = TriviaStore::new();
        let ticket = store.begin_load(DEFAULT_AMOUNT);
        let outcome = store.finish_load(ticket, Ok(data(vec![question("Art", Difficulty::Easy)])));

        assert_eq!(outcome, LoadOutcome::Applied);
        assert!(!store.is_loading());
        assert_eq!(store.questions().len(), 1);
        assert!(store.last_loaded_at().is_some());

        let ticket = store.begin_load(DEFAULT_AMOUNT);
        store.finish_load(ticket, Ok(data(vec![])));
        assert!(store.questions().is_empty());
    }

    #[test]
    fn test_failed_load_keeps_prior_data() {
        let mut store = TriviaStore::new();
        let ticket = store.begin_load(DEFAULT_AMOUNT);
        store.finish_load(ticket, Ok(data(vec![question("Art", Difficulty::Easy)])));

        let ticket = store.begin_load(DEFAULT_AMOUNT);
        assert!(store.is_loading());
        let outcome = store.finish_load(ticket, Err(TriviaError::ApiResponseCode { code: 2 }));

        assert_eq!(outcome, LoadOutcome::Failed);
        assert!(!store.is_loading());
        assert_eq!(store.questions().len(), 1);
        assert_eq!(store.categories().len(), 1);
        assert!(store.error().unwrap().contains("error code"));
        assert_eq!(store.error_category(), Some(ErrorCategory::ApiLogic));
    }

    #[test]
    fn test_begin_load_clears_error() {
        let mut store = TriviaStore::new();
        let ticket = store.begin_load(DEFAULT_AMOUNT);
        store.finish_load(ticket, Err(TriviaError::ApiResponseCode { code: 5 }));
        assert!(store.error().is_some());

        store.begin_load(DEFAULT_AMOUNT);
        assert!(store.error().is_none());
        assert!(store.error_category().is_none());
        assert!(store.is_loading());
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let mut store = TriviaStore::new();
        let first = store.begin_load(10);
        let second = store.begin_load(20);
        assert!(second.request_id > first.request_id);

        // The second request answers first
        let outcome = store.finish_load(second, Ok(data(vec![question("Art", Difficulty::Hard)])));
        assert_eq!(outcome, LoadOutcome::Applied);

        // The first request's late answer must not overwrite it
        let late = data(vec![question("History", Difficulty::Easy); 3]);
        assert_eq!(store.finish_load(first, Ok(late)), LoadOutcome::Stale);
        assert_eq!(store.questions().len(), 1);
        assert_eq!(store.questions()[0].category, "Art");
    }

    #[test]
    fn test_stale_result_does_not_end_loading() {
        let mut store = TriviaStore::new();
        let first = store.begin_load(10);
        let _second = store.begin_load(20);

        store.finish_load(first, Err(TriviaError::ApiResponseCode { code: 1 }));
        assert!(store.is_loading());
        assert!(store.error().is_none());
    }

    #[test]
    fn test_selection_persists_across_reload() {
        let mut store = TriviaStore::new();
        store.set_selected_category("Art");
        let ticket = store.begin_load(DEFAULT_AMOUNT);
        store.finish_load(ticket, Ok(data(vec![question("History", Difficulty::Easy)])));

        assert_eq!(store.selected_category().as_str(), "Art");
        assert!(store.visible_questions().is_empty());
        assert!(store.category_distribution().is_empty());
    }

    #[test]
    fn test_filter_options_start_with_all() {
        let mut store = TriviaStore::new();
        let ticket = store.begin_load(DEFAULT_AMOUNT);
        store.finish_load(
            ticket,
            Ok(data(vec![
                question("Sports", Difficulty::Easy),
                question("Art", Difficulty::Easy),
            ])),
        );
        store.set_selected_category("Sports");
        assert_eq!(store.filter_options(), vec!["all", "Art", "Sports"]);
    }

    #[tokio::test]
    async fn test_load_scenario_decodes_and_counts() {
        let http = MockHttpClient::new();
        http.set_response(
            &format!("{BASE}/api_category.php"),
            MockResponse::json(200, r#"{"trivia_categories":[{"id":1,"name":"Science &amp; Nature"}]}"#),
        );
        http.set_response(
            &format!("{BASE}/api.php"),
            MockResponse::json(
                200,
                r#"{"response_code":0,"results":[{"type":"multiple","difficulty":"hard","category":"Science &amp; Nature","question":"q","correct_answer":"a","incorrect_answers":["b"]}]}"#,
            ),
        );

        let mut store = TriviaStore::new();
        let outcome = store.load(&mock_client(&http), DEFAULT_AMOUNT).await;

        assert_eq!(outcome, LoadOutcome::Applied);
        assert_eq!(store.categories()[0].name, "Science & Nature");
        assert_eq!(
            store.difficulty_distribution(),
            [
                Bucket::new(Difficulty::Easy, 0),
                Bucket::new(Difficulty::Medium, 0),
                Bucket::new(Difficulty::Hard, 1),
            ]
        );
    }

    #[tokio::test]
    async fn test_unmatched_filter_scenario() {
        let http = MockHttpClient::new();
        http.set_response(
            &format!("{BASE}/api_category.php"),
            MockResponse::json(200, r#"{"trivia_categories":[]}"#),
        );
        http.set_response(
            &format!("{BASE}/api.php"),
            MockResponse::json(
                200,
                r#"{"response_code":0,"results":[{"type":"boolean","difficulty":"easy","category":"Art","question":"q","correct_answer":"True","incorrect_answers":["False"]}]}"#,
            ),
        );

        let mut store = TriviaStore::new();
        store.load(&mock_client(&http), DEFAULT_AMOUNT).await;
        store.set_selected_category("General Knowledge");

        assert!(store.visible_questions().is_empty());
        assert!(store.category_distribution().is_empty());
        assert_eq!(store.unique_question_categories(), vec!["Art"]);
    }

    #[tokio::test]
    async fn test_refetch_uses_requested_amount() {
        let http = MockHttpClient::new();
        http.set_response(
            &format!("{BASE}/api_category.php"),
            MockResponse::json(200, r#"{"trivia_categories":[]}"#),
        );
        http.set_response(
            &format!("{BASE}/api.php"),
            MockResponse::json(200, r#"{"response_code":0,"results":[]}"#),
        );

        let mut store = TriviaStore::new();
        store.refetch_questions(&mock_client(&http), 10).await;

        assert!(http
            .get_requests()
            .iter()
            .any(|r| r.url == format!("{BASE}/api.php?amount=10")));
        assert_eq!(store.latest_request_id(), 1);
    }

    #[tokio::test]
    async fn test_http_failure_surfaces_message() {
        let http = MockHttpClient::new();
        http.set_response(
            &format!("{BASE}/api_category.php"),
            MockResponse::json(200, r#"{"trivia_categories":[]}"#),
        );
        http.set_response(&format!("{BASE}/api.php"), MockResponse::status(500));

        let mut store = TriviaStore::new();
        let outcome = store.load(&mock_client(&http), DEFAULT_AMOUNT).await;

        assert_eq!(outcome, LoadOutcome::Failed);
        assert_eq!(store.error(), Some("Request failed: 500"));
        assert_eq!(store.error_category(), Some(ErrorCategory::RequestFailed));
        assert!(!store.is_loading());
    }
}
