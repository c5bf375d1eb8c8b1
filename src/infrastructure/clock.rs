//! Tokio clock adapter

use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::application::ports::Clock;

/// Wall-clock adapter backed by `tokio::time`
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
