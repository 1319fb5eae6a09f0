//! trivia-dash: a terminal dashboard for Open Trivia DB questions.
//!
//! The library holds everything except the event loop so integration tests
//! can drive the fetcher, store and renderer directly.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod decode;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod models;
pub mod startup;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
