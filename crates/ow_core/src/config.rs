//! Runtime settings. Values come from CLI flags or the environment; empty
//! strings are treated as unset.

pub const DEFAULT_NEWS_API_BASE: &str = "https://newsapi.org";
pub const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct NewsApiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl Default for NewsApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_NEWS_API_BASE.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct TelegramConfig {
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
    pub api_base: String,
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &self.bot_token.as_deref().map(|_| "<redacted>"))
            .field("chat_id", &self.chat_id)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            chat_id: None,
            api_base: DEFAULT_TELEGRAM_API_BASE.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub news: NewsApiConfig,
    pub telegram: TelegramConfig,
    /// Bearer secret for the scheduler endpoint. `None` disables it.
    pub cron_secret: Option<String>,
    /// Where the scheduler endpoint reaches this service's own `/check-news`.
    pub base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            news: NewsApiConfig::default(),
            telegram: TelegramConfig::default(),
            cron_secret: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Maps `Some("")` and whitespace-only values to `None`.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
