//! Clock port interface

use async_trait::async_trait;
use std::time::{Duration, Instant};

/// Port for time.
///
/// Every wait in the watcher (scan cadence, stability sampling, remux
/// polling, error backoff) goes through this trait so tests can simulate
/// the passage of time instead of sleeping for real.
#[async_trait]
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;

    async fn sleep(&self, duration: Duration);
}
