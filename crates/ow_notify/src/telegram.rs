use async_trait::async_trait;
use ow_core::config::TelegramConfig;
use ow_core::{Error, Notifier, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, error};

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
    disable_web_page_preview: bool,
}

/// Error envelope returned by the Bot API, e.g.
/// `{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}`.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    description: Option<String>,
}

pub(crate) fn error_description(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.description)
        .filter(|d| !d.is_empty())
}

pub struct TelegramNotifier {
    client: Client,
    config: TelegramConfig,
}

impl fmt::Debug for TelegramNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramNotifier")
            .field("config", &self.config)
            .finish()
    }
}

impl TelegramNotifier {
    pub fn new(client: Client, config: TelegramConfig) -> Self {
        Self { client, config }
    }

    fn credentials(&self) -> Result<(&str, &str)> {
        match (self.config.bot_token.as_deref(), self.config.chat_id.as_deref()) {
            (Some(token), Some(chat_id)) => Ok((token, chat_id)),
            _ => Err(Error::MissingConfig(
                "Telegram credentials not configured".to_string(),
            )),
        }
    }

    fn send_url(&self, token: &str) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.config.api_base.trim_end_matches('/'),
            token
        )
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    fn name(&self) -> &str {
        "Telegram"
    }

    fn is_configured(&self) -> bool {
        self.credentials().is_ok()
    }

    async fn send_message(&self, text: &str) -> Result<()> {
        let (token, chat_id) = self.credentials()?;
        let body = SendMessage {
            chat_id,
            text,
            parse_mode: "HTML",
            disable_web_page_preview: false,
        };

        let response = self
            .client
            .post(self.send_url(token))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                // reqwest embeds the URL, and with it the token
                let e = e.without_url();
                error!("Telegram error: {}", e);
                Error::Http(e)
            })?;

        let status = response.status();
        if status.is_success() {
            debug!("Telegram message delivered");
            return Ok(());
        }

        let raw = response.text().await.unwrap_or_default();
        error!("Telegram error: {} {}", status, raw);
        Err(Error::Telegram {
            status: status.as_u16(),
            description: error_description(&raw)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("Request failed").to_string()),
        })
    }
}
