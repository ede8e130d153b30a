use std::time::Duration;
use tokio::time::{sleep_until, Instant};

/// Keeps a minimum gap between consecutive provider requests.
pub struct RateLimiter {
    gap: Duration,
    last_request: Option<Instant>,
}

impl RateLimiter {
    pub fn new(gap_ms: u64) -> Self {
        Self {
            gap: Duration::from_millis(gap_ms),
            last_request: None,
        }
    }

    pub async fn wait(&mut self) {
        if let Some(ready_at) = self.next_slot() {
            sleep_until(ready_at).await;
        }
        self.last_request = Some(Instant::now());
    }

    fn next_slot(&self) -> Option<Instant> {
        self.last_request.map(|last| last + self.gap)
    }
}
