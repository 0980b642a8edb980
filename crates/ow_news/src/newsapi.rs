//! NewsAPI `everything` search client.
//!
//! One query per call, newest first. Any failure is logged and reported as
//! an empty feed; the orchestrator treats "no news" and "fetch failed" the
//! same way.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ow_core::config::NewsApiConfig;
use ow_core::{Article, Error, NewsSource, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, info};
use url::Url;

pub const QUERY: &str = "crude oil OR WTI OR Brent";
pub const PAGE_SIZE: u32 = 20;
const REMOVED_MARKER: &str = "[Removed]";

#[derive(Debug, Deserialize)]
struct NewsApiResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Vec<WireArticle>,
}

#[derive(Debug, Deserialize)]
struct WireArticle {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default, rename = "publishedAt")]
    published_at: Option<String>,
    #[serde(default)]
    source: Option<WireSource>,
}

#[derive(Debug, Deserialize)]
struct WireSource {
    #[serde(default)]
    name: Option<String>,
}

impl WireArticle {
    fn into_article(self, fetched_at: DateTime<Utc>) -> Option<Article> {
        let title = self.title.filter(|t| !t.trim().is_empty() && t != REMOVED_MARKER)?;
        let url = self.url.filter(|u| !u.trim().is_empty())?;
        let published_at = self
            .published_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or(fetched_at);
        let source_name = self
            .source
            .and_then(|s| s.name)
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| "Unknown".to_string());

        Some(Article {
            title,
            description: self.description,
            url,
            published_at,
            source_name,
        })
    }
}

/// Decodes a NewsAPI body, rejecting `status: "error"` payloads.
pub(crate) fn parse_response(body: &str, fetched_at: DateTime<Utc>) -> Result<Vec<Article>> {
    let response: NewsApiResponse = serde_json::from_str(body)?;
    if response.status == "error" {
        return Err(Error::NewsApi(format!(
            "{}: {}",
            response.code.as_deref().unwrap_or("unknown"),
            response.message.as_deref().unwrap_or("no message"),
        )));
    }

    let total = response.articles.len();
    let articles: Vec<Article> = response
        .articles
        .into_iter()
        .filter_map(|a| a.into_article(fetched_at))
        .collect();
    if articles.len() < total {
        debug!("Skipped {} incomplete articles", total - articles.len());
    }
    Ok(articles)
}

pub struct NewsApiClient {
    client: Client,
    config: NewsApiConfig,
}

impl std::fmt::Debug for NewsApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsApiClient")
            .field("api_key", &self.config.api_key.as_deref().map(|_| "<redacted>"))
            .field("base_url", &self.config.base_url)
            .finish()
    }
}

impl NewsApiClient {
    pub fn new(client: Client, config: NewsApiConfig) -> Self {
        Self { client, config }
    }

    /// The base may carry a path prefix (e.g. behind a proxy); it is kept.
    fn endpoint(&self) -> Result<Url> {
        let raw = format!("{}/v2/everything", self.config.base_url.trim_end_matches('/'));
        Url::parse(&raw)
            .map_err(|e| Error::NewsApi(format!("Invalid base URL {}: {}", self.config.base_url, e)))
    }

    async fn try_fetch(&self, api_key: &str) -> Result<Vec<Article>> {
        let page_size = PAGE_SIZE.to_string();
        let response = self
            .client
            .get(self.endpoint()?)
            .query(&[
                ("q", QUERY),
                ("sortBy", "publishedAt"),
                ("language", "en"),
                ("pageSize", page_size.as_str()),
                ("apiKey", api_key),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            // Error payloads carry a code and message worth logging
            return match parse_response(&body, Utc::now()) {
                Err(e @ Error::NewsApi(_)) => Err(e),
                _ => Err(Error::NewsApi(format!("HTTP {}", status))),
            };
        }
        parse_response(&body, Utc::now())
    }
}

#[async_trait]
impl NewsSource for NewsApiClient {
    fn name(&self) -> &str {
        "NewsAPI"
    }

    async fn fetch_articles(&self) -> Vec<Article> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            debug!("NEWS_API_KEY not set, skipping fetch");
            return Vec::new();
        };

        match self.try_fetch(api_key).await {
            Ok(articles) => {
                info!("📰 Fetched {} articles from {}", articles.len(), self.name());
                articles
            }
            Err(e) => {
                error!("NewsAPI error: {}", e);
                Vec::new()
            }
        }
    }
}
