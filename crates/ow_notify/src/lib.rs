pub mod telegram;
pub mod throttle;

pub use telegram::TelegramNotifier;
pub use throttle::{ThrottledSender, DEFAULT_SEND_DELAY};
