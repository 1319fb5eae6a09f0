//! Delay trait abstraction.
//!
//! The retry fetcher waits between attempts through this trait so tests can
//! record the requested backoff instead of sleeping.

use async_trait::async_trait;
use std::time::Duration;

/// Trait for waiting a fixed duration without blocking a worker thread.
#[async_trait]
pub trait Delay: Send + Sync {
    /// Wait for `duration`, yielding to the runtime in the meantime.
    async fn sleep(&self, duration: Duration);
}
