//! Fakes for the seam traits, shared by the workspace's tests.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::{Article, Error, NewsSource, Notifier, Result, Sleeper};

pub fn article(title: &str, description: Option<&str>) -> Article {
    Article {
        title: title.to_string(),
        description: description.map(str::to_string),
        url: format!("https://example.com/news/{}", title.to_lowercase().replace(' ', "-")),
        published_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        source_name: "Test Wire".to_string(),
    }
}

/// Returns the same articles on every fetch.
pub struct StaticSource {
    articles: Vec<Article>,
    fetches: AtomicUsize,
}

impl StaticSource {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            articles,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NewsSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_articles(&self) -> Vec<Article> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.articles.clone()
    }
}

/// Records every delivered message; can be told to fail on the Nth send
/// (1-based) or to act as if credentials were missing.
pub struct RecordingNotifier {
    sent: Mutex<Vec<String>>,
    attempts: AtomicUsize,
    fail_on: Option<usize>,
    configured: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            attempts: AtomicUsize::new(0),
            fail_on: None,
            configured: true,
        }
    }

    pub fn failing_on(attempt: usize) -> Self {
        Self {
            fail_on: Some(attempt),
            ..Self::new()
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::new()
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl Default for RecordingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    fn name(&self) -> &str {
        "recording"
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn send_message(&self, text: &str) -> Result<()> {
        if !self.configured {
            return Err(Error::MissingConfig("Telegram credentials not configured".to_string()));
        }
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_on == Some(attempt) {
            return Err(Error::Telegram {
                status: 429,
                description: "Too Many Requests: retry after 1".to_string(),
            });
        }
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Records requested pauses instead of sleeping.
#[derive(Default)]
pub struct RecordingSleeper {
    pauses: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.pauses.lock().unwrap().push(duration);
    }
}
