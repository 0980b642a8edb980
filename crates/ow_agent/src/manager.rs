use ow_core::alert::format_alert;
use ow_core::keywords::{article_is_high_intensity, matched_keywords};
use ow_core::prelude::*;
use ow_notify::ThrottledSender;
use std::sync::Arc;
use tracing::{debug, info};

/// Alerts sent per pass; further matches are counted but not sent.
pub const MAX_ALERTS_PER_RUN: usize = 5;

pub struct AlertManager {
    source: Arc<dyn NewsSource>,
    sender: ThrottledSender,
}

impl AlertManager {
    pub fn new(source: Arc<dyn NewsSource>, sender: ThrottledSender) -> Self {
        Self { source, sender }
    }

    /// One fetch → classify → notify pass.
    ///
    /// An empty feed is replaced by [`Article::demo`], which always matches.
    /// A failed send aborts the alerts after it and fails the whole pass,
    /// even when earlier alerts already went out.
    pub async fn run(&self) -> Result<CheckSummary> {
        info!("🛢️ Checking {} for crude oil news", self.source.name());
        let fetched = self.source.fetch_articles().await;
        let news_count = fetched.len();

        let articles = if fetched.is_empty() {
            info!("📭 No articles fetched, using demo article");
            vec![Article::demo()]
        } else {
            fetched
        };

        let matches: Vec<&Article> = articles
            .iter()
            .filter(|a| article_is_high_intensity(&a.title, a.description.as_deref()))
            .collect();

        for article in &matches {
            let text = format!("{} {}", article.title, article.description.as_deref().unwrap_or(""));
            debug!("🔥 {} [{}]", article.title, matched_keywords(&text).join(", "));
        }
        info!("🔥 {} of {} articles are high-intensity", matches.len(), articles.len());

        if matches.is_empty() {
            return Ok(CheckSummary {
                success: true,
                news_count,
                high_intensity_count: 0,
                sent: false,
            });
        }

        let messages: Vec<String> = matches
            .iter()
            .take(MAX_ALERTS_PER_RUN)
            .map(|a| format_alert(a))
            .collect();
        self.sender.send_all(&messages).await?;

        Ok(CheckSummary {
            success: true,
            news_count,
            high_intensity_count: matches.len(),
            sent: true,
        })
    }
}
