//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET against the trivia API
//! - [`Delay`] - Non-blocking waits used by the retry backoff

pub mod delay;
pub mod http;

pub use delay::Delay;
pub use http::{Headers, HttpClient, HttpError, Response};
