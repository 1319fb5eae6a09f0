//! Tokio timer adapter for the [`Delay`] trait.

use async_trait::async_trait;
use std::time::Duration;

use crate::traits::Delay;

/// Production delay backed by `tokio::time::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_tokio_delay_advances_clock() {
        let start = tokio::time::Instant::now();
        TokioDelay.sleep(Duration::from_millis(600)).await;
        assert!(start.elapsed() >= Duration::from_millis(600));
    }
}
