pub mod diagnostics;
pub mod manager;

pub use diagnostics::{run_telegram_test, TelegramTestReport};
pub use manager::{AlertManager, MAX_ALERTS_PER_RUN};
