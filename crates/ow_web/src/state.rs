use std::sync::Arc;
use ow_agent::AlertManager;
use ow_core::{NewsSource, Notifier, Settings};
use ow_news::NewsApiClient;
use ow_notify::{TelegramNotifier, ThrottledSender};
use reqwest::Client;

pub struct AppState {
    pub manager: AlertManager,
    pub notifier: Arc<dyn Notifier>,
    /// `None` rejects every scheduler call.
    pub cron_secret: Option<String>,
    pub base_url: String,
    pub http: Client,
}

impl AppState {
    pub fn from_settings(settings: &Settings, http: Client) -> Self {
        let source: Arc<dyn NewsSource> =
            Arc::new(NewsApiClient::new(http.clone(), settings.news.clone()));
        let notifier: Arc<dyn Notifier> =
            Arc::new(TelegramNotifier::new(http.clone(), settings.telegram.clone()));
        let manager = AlertManager::new(source, ThrottledSender::new(notifier.clone()));

        Self {
            manager,
            notifier,
            cron_secret: settings.cron_secret.clone(),
            base_url: settings.base_url.clone(),
            http,
        }
    }
}
