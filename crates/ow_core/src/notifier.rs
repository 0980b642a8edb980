use async_trait::async_trait;
use std::time::Duration;
use crate::Result;

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Returns the name of the messaging backend
    fn name(&self) -> &str;

    /// Whether the credentials needed to send are present
    fn is_configured(&self) -> bool;

    /// Sends one HTML formatted message
    async fn send_message(&self, text: &str) -> Result<()>;
}

/// Pauses between sends. Swapped out in tests so nothing really waits.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
