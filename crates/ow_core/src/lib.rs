pub mod alert;
pub mod config;
pub mod error;
pub mod http;
pub mod keywords;
pub mod notifier;
pub mod source;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::Settings;
pub use error::{Error, Result};
pub use http::HttpClientFactory;
pub use notifier::{Notifier, Sleeper, TokioSleeper};
pub use source::NewsSource;
pub use types::{Article, CheckSummary};

pub mod prelude {
    pub use super::{Article, CheckSummary, Error, NewsSource, Notifier, Result};
}
