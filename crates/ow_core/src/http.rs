use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use crate::Result;

pub struct HttpClientFactory;

impl HttpClientFactory {
    /// Shared client for NewsAPI, Telegram and the scheduler's self call.
    /// Only connecting is bounded; a `/check-news` pass may take as long
    /// as its sends do.
    pub fn create() -> Result<Client> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("oilwatch/", env!("CARGO_PKG_VERSION")))
            .build()?;
        debug!("🌐 HTTP client ready");
        Ok(client)
    }
}
