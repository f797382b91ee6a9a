use super::ensure_success;
use crate::domain::entities::FeedItem;
use crate::domain::errors::UpstreamError;
use crate::domain::ports::news_feed::NewsFeed;
use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client};

const CONTENT_MODULE_NS: &str = "http://purl.org/rss/1.0/modules/content/";

/// RSS 2.0 feed fetched over HTTP
pub struct RssFeedClient {
    http_client: Client,
    feed_url: String,
}

impl RssFeedClient {
    pub fn new(http_client: Client, feed_url: impl Into<String>) -> Self {
        Self {
            http_client,
            feed_url: feed_url.into(),
        }
    }
}

#[async_trait]
impl NewsFeed for RssFeedClient {
    async fn fetch_items(&self) -> Result<Vec<FeedItem>, UpstreamError> {
        tracing::debug!("Fetching RSS feed {}", self.feed_url);

        let response = self
            .http_client
            .get(&self.feed_url)
            .header(ACCEPT, "application/rss+xml, application/xml, text/xml")
            .send()
            .await?;

        let body = ensure_success(response).await?.text().await?;
        parse_rss(&body)
    }
}

/// Items of an RSS document in document order.
///
/// `description` falls back to `content:encoded` when absent.
pub fn parse_rss(xml: &str) -> Result<Vec<FeedItem>, UpstreamError> {
    let doc = roxmltree::Document::parse(xml)
        .map_err(|e| UpstreamError::Malformed(format!("Invalid RSS document: {}", e)))?;

    let root = doc.root_element();
    if root.tag_name().name() != "rss" {
        return Err(UpstreamError::Malformed(format!(
            "Expected <rss> root element, found <{}>",
            root.tag_name().name()
        )));
    }

    let items = root
        .descendants()
        .filter(|node| node.is_element() && node.tag_name().name() == "item")
        .map(|item| {
            let child_text = |name: &str, namespace: Option<&str>| {
                item.children()
                    .find(|c| {
                        c.is_element()
                            && c.tag_name().name() == name
                            && c.tag_name().namespace() == namespace
                    })
                    .map(|c| c.text().unwrap_or_default().trim().to_string())
            };

            FeedItem {
                title: child_text("title", None),
                link: child_text("link", None),
                description: child_text("description", None)
                    .filter(|d| !d.is_empty())
                    .or_else(|| child_text("encoded", Some(CONTENT_MODULE_NS))),
                pub_date: child_text("pubDate", None),
            }
        })
        .collect();

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:content="http://purl.org/rss/1.0/modules/content/">
  <channel>
    <title>Onward State</title>
    <item>
      <title>THON Total Announced</title>
      <link>https://onwardstate.com/thon</link>
      <description><![CDATA[<p>Dancers raised a record amount.</p>]]></description>
      <pubDate>Sun, 18 Feb 2024 21:00:00 +0000</pubDate>
    </item>
    <item>
      <title>Snow Day</title>
      <content:encoded><![CDATA[<p>Classes are cancelled.</p>]]></content:encoded>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn test_parse_items_in_order() {
        let items = parse_rss(FEED).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title.as_deref(), Some("THON Total Announced"));
        assert_eq!(items[0].link.as_deref(), Some("https://onwardstate.com/thon"));
        assert_eq!(
            items[0].description.as_deref(),
            Some("<p>Dancers raised a record amount.</p>")
        );
        assert_eq!(
            items[0].pub_date.as_deref(),
            Some("Sun, 18 Feb 2024 21:00:00 +0000")
        );
    }

    #[test]
    fn test_content_encoded_fallback() {
        let items = parse_rss(FEED).unwrap();
        assert_eq!(items[1].link, None);
        assert_eq!(
            items[1].description.as_deref(),
            Some("<p>Classes are cancelled.</p>")
        );
    }

    #[test]
    fn test_rejects_non_rss() {
        assert!(matches!(
            parse_rss("<html><body>maintenance</body></html>"),
            Err(UpstreamError::Malformed(_))
        ));
        assert!(matches!(parse_rss("not xml"), Err(UpstreamError::Malformed(_))));
    }
}
