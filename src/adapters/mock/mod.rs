//! Mock implementations for testing.
//!
//! These mocks let the retry fetcher, API client and data store be tested
//! without network access or real timers.

pub mod delay;
pub mod http;

pub use delay::RecordingDelay;
pub use http::{MockHttpClient, MockResponse};
