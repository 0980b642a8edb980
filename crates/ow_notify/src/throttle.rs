use ow_core::{Error, Notifier, Result, Sleeper, TokioSleeper};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub const DEFAULT_SEND_DELAY: Duration = Duration::from_secs(1);

/// Sends messages one at a time with a fixed pause between consecutive
/// sends. Stops at the first failure.
pub struct ThrottledSender {
    notifier: Arc<dyn Notifier>,
    sleeper: Arc<dyn Sleeper>,
    delay: Duration,
}

impl ThrottledSender {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            notifier,
            sleeper: Arc::new(TokioSleeper),
            delay: DEFAULT_SEND_DELAY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns the number of messages delivered. On failure the error
    /// records how many went out before it.
    pub async fn send_all(&self, messages: &[String]) -> Result<usize> {
        let total = messages.len();
        for (i, message) in messages.iter().enumerate() {
            if i > 0 {
                self.sleeper.sleep(self.delay).await;
            }
            if let Err(e) = self.notifier.send_message(message).await {
                return Err(match e {
                    // Nothing went out; keep the original error
                    Error::MissingConfig(_) if i == 0 => e,
                    e => Error::Delivery {
                        delivered: i,
                        source: Box::new(e),
                    },
                });
            }
            info!("📨 Sent alert {}/{} via {}", i + 1, total, self.notifier.name());
        }
        Ok(total)
    }
}
