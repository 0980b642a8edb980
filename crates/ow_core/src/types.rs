use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub published_at: DateTime<Utc>,
    pub source_name: String,
}

impl Article {
    /// The stand-in article used when the feed comes back empty, so a
    /// fresh deployment still produces a visible alert.
    pub fn demo() -> Self {
        Self {
            title: "BREAKING: OPEC+ Announces Surprise Production Cut".to_string(),
            description: Some(
                "Major oil producers agree to slash output by 1 million barrels per day".to_string(),
            ),
            url: "https://example.com/news/1".to_string(),
            published_at: Utc::now(),
            source_name: "Energy News".to_string(),
        }
    }
}

/// Outcome of one fetch → classify → notify pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckSummary {
    pub success: bool,
    pub news_count: usize,
    pub high_intensity_count: usize,
    pub sent: bool,
}
