use std::time::Duration;
use tracing::info;

// Pacer spaces out lookups by a fixed delay. A zero delay turns it into a no-op.
#[derive(Debug, Clone, Copy)]
pub struct Pacer {
    delay: Duration,
}

impl Pacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub async fn pause(&self) {
        if self.delay.is_zero() {
            return;
        }
        info!(delay_ms = self.delay.as_millis() as u64, "waiting to respect rate limit");
        tokio::time::sleep(self.delay).await;
    }
}
