//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Focus`] - Which panel receives navigation keys
//! - [`AppMessage`] - Messages from background load tasks
//!
//! Network work never runs on the UI task. [`App::start_load`] takes a
//! ticket from the store, spawns the fetch, and the result comes back
//! through the message channel to [`App::handle_message`].

mod handlers;
mod messages;
mod types;

pub use messages::AppMessage;
pub use types::Focus;

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::TriviaClient;
use crate::models::Category;
use crate::startup::config::{clamp_amount, DashboardConfig};
use crate::state::{category_navigation, LoadOutcome, LoadTicket, TriviaStore};

/// Step applied by the `+`/`-` keys to the refetch amount.
pub const AMOUNT_STEP: u32 = 5;

/// Main application state
pub struct App {
    /// Fetched data, filter and load status
    pub store: TriviaStore,
    /// API client shared with spawned load tasks
    pub client: Arc<TriviaClient>,
    /// Receiver for async messages (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Panel receiving navigation keys
    pub focus: Focus,
    /// Highlighted row in the category sidebar
    pub sidebar_index: usize,
    /// Question count used by the next refetch
    pub refetch_amount: u32,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Tick counter for the loading spinner
    pub tick_count: u64,
    /// Dirty flag: set when state changed and the UI must be redrawn
    pub needs_redraw: bool,
}

impl App {
    /// Create an app that loads `amount` questions through `client`.
    pub fn new(client: TriviaClient, amount: u32) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            store: TriviaStore::new(),
            client: Arc::new(client),
            message_rx: Some(message_rx),
            message_tx,
            focus: Focus::default(),
            sidebar_index: 0,
            refetch_amount: clamp_amount(amount),
            should_quit: false,
            tick_count: 0,
            needs_redraw: true,
        }
    }

    /// Create an app from resolved configuration.
    pub fn from_config(config: &DashboardConfig) -> Self {
        let mut app = Self::new(config.build_client(), config.amount);
        if let Some(category) = &config.initial_category {
            app.store.set_selected_category(category);
        }
        app
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance animation state
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Start a load of `refetch_amount` questions in the background.
    ///
    /// Must be called inside a tokio runtime.
    pub fn start_load(&mut self) -> LoadTicket {
        let ticket = self.store.begin_load(self.refetch_amount);
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();

        tokio::spawn(async move {
            let result = client.load(ticket.amount).await;
            // Receiver gone means the app is shutting down.
            let _ = tx.send(AppMessage::LoadFinished { ticket, result });
        });

        self.mark_dirty();
        ticket
    }

    /// Refetch on user request; ignored while a load is in flight.
    pub fn refetch(&mut self) -> Option<LoadTicket> {
        if self.store.is_loading() {
            tracing::debug!("refetch ignored: load in progress");
            return None;
        }
        Some(self.start_load())
    }

    /// Handle an incoming async message
    pub fn handle_message(&mut self, msg: AppMessage) -> LoadOutcome {
        self.mark_dirty();
        match msg {
            AppMessage::LoadFinished { ticket, result } => {
                let outcome = self.store.finish_load(ticket, result);
                if outcome == LoadOutcome::Applied {
                    self.clamp_sidebar();
                }
                outcome
            }
        }
    }

    /// Sidebar rows: every fetched category with its visible question count.
    pub fn sidebar_entries(&self) -> Vec<(&Category, usize)> {
        category_navigation(self.store.categories(), &self.store.visible_questions())
    }

    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn move_up(&mut self) {
        match self.focus {
            Focus::Sidebar => self.sidebar_index = self.sidebar_index.saturating_sub(1),
            Focus::Filter => self.cycle_filter(false),
        }
    }

    pub fn move_down(&mut self) {
        match self.focus {
            Focus::Sidebar => {
                let len = self.store.categories().len();
                if len > 0 && self.sidebar_index < len - 1 {
                    self.sidebar_index += 1;
                }
            }
            Focus::Filter => self.cycle_filter(true),
        }
    }

    /// Filter by the category highlighted in the sidebar.
    pub fn select_highlighted(&mut self) {
        if let Some(category) = self.store.categories().get(self.sidebar_index) {
            let name = category.name.clone();
            self.store.set_selected_category(&name);
        }
    }

    /// Clear the category filter. Ignored while loading, like the filter bar.
    pub fn show_all(&mut self) {
        if self.store.is_loading() {
            return;
        }
        self.store.set_selected_category(crate::state::ALL_CATEGORIES);
    }

    /// Step through `"all"` and the question categories, wrapping.
    ///
    /// A selection outside the option list (picked from the sidebar)
    /// restarts the cycle at `"all"`. The filter bar is locked while a
    /// load is in flight.
    pub fn cycle_filter(&mut self, forward: bool) {
        if self.store.is_loading() {
            return;
        }
        let options = self.store.filter_options();
        let len = options.len();
        let current = options
            .iter()
            .position(|o| o == self.store.selected_category().as_str());

        let next = match (current, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };

        self.store.set_selected_category(&options[next]);
    }

    /// Adjust the refetch amount, staying within what the API serves.
    pub fn adjust_amount(&mut self, increase: bool) {
        let amount = if increase {
            self.refetch_amount.saturating_add(AMOUNT_STEP)
        } else {
            self.refetch_amount.saturating_sub(AMOUNT_STEP)
        };
        self.refetch_amount = clamp_amount(amount);
    }

    fn clamp_sidebar(&mut self) {
        let len = self.store.categories().len();
        self.sidebar_index = self.sidebar_index.min(len.saturating_sub(1));
    }
}
