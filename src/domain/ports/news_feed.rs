use crate::domain::entities::FeedItem;
use crate::domain::errors::UpstreamError;
use async_trait::async_trait;

#[async_trait]
pub trait NewsFeed: Send + Sync {
    /// Items of the feed, in document order
    async fn fetch_items(&self) -> Result<Vec<FeedItem>, UpstreamError>;
}
