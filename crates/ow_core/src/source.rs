use async_trait::async_trait;
use crate::types::Article;

#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Returns the name of the upstream feed
    fn name(&self) -> &str;

    /// Fetches the latest articles. Failures are logged by the
    /// implementation and surface as an empty list.
    async fn fetch_articles(&self) -> Vec<Article>;
}
