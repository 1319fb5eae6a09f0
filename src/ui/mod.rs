//! UI rendering for the dashboard.
//!
//! ```text
//! ┌ Categories ┐┌ header ───────────────────────────┐
//! │            │├ filter bar ───────────────────────┤
//! │            ││ Showing N questions in view.      │
//! │            │├ by category ──┐┌ by difficulty ──┤
//! │            ││               ││                  │
//! │            │├ sample table ──────────────────────┤
//! └────────────┘└───────────────────────────────────┘
//! ```
//!
//! While loading, or when the last load failed, the charts and table are
//! replaced by a state message.

pub mod charts;
pub mod filter_bar;
pub mod header;
pub mod helpers;
pub mod sidebar;
pub mod states;
pub mod table;
pub mod theme;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

use crate::app::App;
use crate::error::ErrorCategory;
use crate::state::{sample_questions, SAMPLE_SIZE};

const SIDEBAR_WIDTH: u16 = 32;

/// Render the whole dashboard.
pub fn render(frame: &mut Frame, app: &App) {
    let [side, main] =
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .areas(frame.area());

    sidebar::render(frame, side, app);

    let [header_area, filter_area, badge_area, content] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(main);

    header::render(frame, header_area, app);
    filter_bar::render(frame, filter_area, app);
    filter_bar::render_count_badge(frame, badge_area, app);

    if app.store.is_loading() {
        states::render_loading(frame, content);
    } else if let Some(error) = app.store.error() {
        let hint = app
            .store
            .error_category()
            .unwrap_or(ErrorCategory::Unknown)
            .recovery_hint();
        states::render_error(frame, content, error, hint);
    } else {
        render_content(frame, content, app);
    }
}

fn render_content(frame: &mut Frame, area: Rect, app: &App) {
    let store = &app.store;
    let selected = store.selected_category();
    let filter_label = (!selected.is_all()).then(|| selected.label());
    let visible = store.visible_questions();

    let [charts_area, table_area] =
        Layout::vertical([Constraint::Percentage(55), Constraint::Min(6)]).areas(area);
    let [category_area, difficulty_area] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .areas(charts_area);

    charts::render_category_chart(
        frame,
        category_area,
        &store.category_distribution(),
        filter_label,
    );
    charts::render_difficulty_chart(
        frame,
        difficulty_area,
        &store.difficulty_distribution(),
        filter_label,
    );
    table::render(
        frame,
        table_area,
        sample_questions(&visible, SAMPLE_SIZE),
        filter_label,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Endpoint, TriviaClient, TriviaData};
    use crate::error::{FetchError, TriviaError};
    use crate::models::{Category, Difficulty, Question, QuestionType};
    use ratatui::{backend::TestBackend, Terminal};

    fn question(category: &str, difficulty: Difficulty, text: &str) -> Question {
        Question {
            category: category.to_string(),
            question_type: QuestionType::Multiple,
            difficulty,
            question: text.to_string(),
            correct_answer: "A".to_string(),
            incorrect_answers: vec!["B".to_string(), "C".to_string(), "D".to_string()],
        }
    }

    fn create_test_app() -> App {
        App::new(TriviaClient::with_url("https://trivia.test"), 50)
    }

    fn loaded_app() -> App {
        let mut app = create_test_app();
        let ticket = app.store.begin_load(50);
        app.store.finish_load(
            ticket,
            Ok(TriviaData {
                categories: vec![
                    Category::new(23, "History"),
                    Category::new(25, "Art"),
                ],
                questions: vec![
                    question("History", Difficulty::Easy, "Who built it?"),
                    question("Art", Difficulty::Hard, "Who painted it?"),
                    question("History", Difficulty::Medium, "When was it?"),
                ],
            }),
        );
        app
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_initial_render_shows_loading() {
        let text = draw(&create_test_app());
        assert!(text.contains(header::TITLE));
        assert!(text.contains(states::LOADING_TEXT));
        assert!(text.contains("Showing 0 questions in view."));
        assert!(!text.contains("Questions by Category"));
    }

    #[test]
    fn test_loaded_render_shows_charts_and_table() {
        let text = draw(&loaded_app());
        assert!(text.contains("Showing 3 questions in view."));
        assert!(text.contains("Questions by Category"));
        assert!(text.contains("Questions by Difficulty"));
        assert!(text.contains("Sample (first 10 questions)"));
        assert!(text.contains("Who painted it?"));
        assert!(text.contains("All categories"));
        assert!(!text.contains(states::LOADING_TEXT));
    }

    #[test]
    fn test_filtered_render_suffixes_titles() {
        let mut app = loaded_app();
        app.store.set_selected_category("Art");

        let text = draw(&app);
        assert!(text.contains("Showing 1 questions in view."));
        assert!(text.contains("Questions by Category — Art"));
        assert!(text.contains("Questions by Difficulty — Art"));
        assert!(!text.contains("Who built it?"));
    }

    #[test]
    fn test_unmatched_filter_renders_empty_state() {
        let mut app = loaded_app();
        app.store.set_selected_category("Geography");

        let text = draw(&app);
        assert!(text.contains("Showing 0 questions in view."));
        assert!(text.contains(charts::EMPTY_TEXT));
    }

    #[test]
    fn test_error_render_hides_charts() {
        let mut app = create_test_app();
        let ticket = app.store.begin_load(50);
        app.store.finish_load(
            ticket,
            Err(TriviaError::Fetch {
                endpoint: Endpoint::Questions,
                source: FetchError::RequestFailed {
                    status: 503,
                    attempts: 4,
                },
            }),
        );

        let text = draw(&app);
        assert!(text.contains("Request failed: 503"));
        assert!(text.contains(ErrorCategory::RequestFailed.recovery_hint()));
        assert!(!text.contains("Questions by Category"));
        assert!(!text.contains(states::LOADING_TEXT));
    }
}
