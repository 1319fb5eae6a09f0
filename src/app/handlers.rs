//! Keyboard handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::App;

impl App {
    /// Handle a key press. Releases and repeats are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.mark_dirty();

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') => self.quit(),
            KeyCode::Tab => self.cycle_focus(),
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Enter => self.select_highlighted(),
            KeyCode::Char('a') => self.show_all(),
            KeyCode::Left => self.cycle_filter(false),
            KeyCode::Right => self.cycle_filter(true),
            KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_amount(true),
            KeyCode::Char('-') => self.adjust_amount(false),
            KeyCode::Char('r') => {
                self.refetch();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::api::TriviaClient;
    use crate::app::{App, Focus};
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
    use std::sync::Arc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::status(500));
        App::new(
            TriviaClient::with_url("https://trivia.test").with_http(Arc::new(http)),
            20,
        )
    }

    #[test]
    fn test_q_quits() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_plain_c_does_nothing() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('c')));
        assert!(!app.should_quit);
    }

    #[test]
    fn test_tab_switches_focus() {
        let mut app = app();
        assert_eq!(app.focus, Focus::Sidebar);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Filter);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Sidebar);
    }

    #[test]
    fn test_amount_keys() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('+')));
        assert_eq!(app.refetch_amount, 25);
        app.handle_key(key(KeyCode::Char('-')));
        app.handle_key(key(KeyCode::Char('-')));
        assert_eq!(app.refetch_amount, 15);
    }

    #[test]
    fn test_release_is_ignored() {
        let mut app = app();
        app.needs_redraw = false;
        app.handle_key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(!app.should_quit);
        assert!(!app.needs_redraw);
    }

    #[tokio::test]
    async fn test_r_refetches_once() {
        let mut app = app();
        app.start_load();
        app.handle_key(key(KeyCode::Char('r')));
        assert!(app.store.is_loading());
        assert_eq!(app.store.latest_request_id(), 1);
    }
}
