//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`TokioDelay`] - Backoff waits on the tokio timer
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Scripted HTTP responses per URL
//! - [`mock::RecordingDelay`] - Records requested waits without sleeping

pub mod mock;
pub mod reqwest_http;
pub mod tokio_delay;

pub use mock::{MockHttpClient, RecordingDelay};
pub use reqwest_http::ReqwestHttpClient;
pub use tokio_delay::TokioDelay;
