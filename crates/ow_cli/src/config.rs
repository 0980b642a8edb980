use clap::Args;
use ow_core::config::{
    non_empty, NewsApiConfig, Settings, TelegramConfig, DEFAULT_BASE_URL, DEFAULT_NEWS_API_BASE,
    DEFAULT_TELEGRAM_API_BASE,
};

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// NewsAPI.org key. Without it the demo article is used.
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true)]
    pub news_api_key: Option<String>,

    #[arg(long, env = "NEWS_API_BASE", default_value = DEFAULT_NEWS_API_BASE)]
    pub news_api_base: String,

    #[arg(long, env = "TELEGRAM_BOT_TOKEN", hide_env_values = true)]
    pub telegram_bot_token: Option<String>,

    #[arg(long, env = "TELEGRAM_CHAT_ID")]
    pub telegram_chat_id: Option<String>,

    #[arg(long, env = "TELEGRAM_API_BASE", default_value = DEFAULT_TELEGRAM_API_BASE)]
    pub telegram_api_base: String,

    /// Bearer secret for GET /cron. Unset disables the endpoint.
    #[arg(long, env = "CRON_SECRET", hide_env_values = true)]
    pub cron_secret: Option<String>,

    /// Public URL of this service, used by /cron to reach /check-news.
    #[arg(long, env = "BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

impl From<ConfigArgs> for Settings {
    fn from(args: ConfigArgs) -> Self {
        Settings {
            news: NewsApiConfig {
                api_key: non_empty(args.news_api_key),
                base_url: args.news_api_base,
            },
            telegram: TelegramConfig {
                bot_token: non_empty(args.telegram_bot_token),
                chat_id: non_empty(args.telegram_chat_id),
                api_base: args.telegram_api_base,
            },
            cron_secret: non_empty(args.cron_secret),
            base_url: args.base_url,
        }
    }
}
