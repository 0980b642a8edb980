use chrono::Utc;
use ow_core::alert::format_test_message;
use ow_core::Notifier;
use tracing::{error, info, warn};

pub const NOT_CONFIGURED_MESSAGE: &str = "Telegram credentials not configured. \
     Please set TELEGRAM_BOT_TOKEN and TELEGRAM_CHAT_ID environment variables.";
pub const SENT_MESSAGE: &str = "Test message sent successfully!";

/// Result of a credential check. Never an error: a bad setup is a
/// reportable outcome here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TelegramTestReport {
    NotConfigured,
    Sent,
    Failed(String),
}

impl TelegramTestReport {
    pub fn is_success(&self) -> bool {
        matches!(self, TelegramTestReport::Sent)
    }

    pub fn message(&self) -> &str {
        match self {
            TelegramTestReport::NotConfigured => NOT_CONFIGURED_MESSAGE,
            TelegramTestReport::Sent => SENT_MESSAGE,
            TelegramTestReport::Failed(reason) => reason,
        }
    }
}

pub async fn run_telegram_test(notifier: &dyn Notifier) -> TelegramTestReport {
    if !notifier.is_configured() {
        warn!("⚠️ {} test skipped: credentials missing", notifier.name());
        return TelegramTestReport::NotConfigured;
    }

    match notifier.send_message(&format_test_message(Utc::now())).await {
        Ok(()) => {
            info!("✅ {} test message sent", notifier.name());
            TelegramTestReport::Sent
        }
        Err(e) => {
            error!("{} test failed: {}", notifier.name(), e);
            let reason = e
                .telegram_description()
                .map(str::to_string)
                .unwrap_or_else(|| e.to_string());
            TelegramTestReport::Failed(reason)
        }
    }
}
