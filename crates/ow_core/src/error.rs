use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    MissingConfig(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Telegram API error ({status}): {description}")]
    Telegram { status: u16, description: String },

    #[error("NewsAPI error: {0}")]
    NewsApi(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Delivery stopped after {delivered} alert(s): {source}")]
    Delivery {
        delivered: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("Unauthorized")]
    Unauthorized,
}

impl Error {
    /// The human readable reason reported by the Bot API, if this error
    /// (or the error it wraps) came from a rejected send.
    pub fn telegram_description(&self) -> Option<&str> {
        match self {
            Error::Telegram { description, .. } => Some(description),
            Error::Delivery { source, .. } => source.telegram_description(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
