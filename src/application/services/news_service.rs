use crate::domain::entities::{FeedItem, NewsArticle};
use crate::domain::errors::UpstreamError;
use crate::domain::ports::news_feed::NewsFeed;
use regex::Regex;
use std::sync::{Arc, OnceLock};

pub const DEFAULT_ARTICLE_LIMIT: usize = 5;
pub const DEFAULT_EXCERPT_CHARS: usize = 150;

/// Turns a raw RSS feed into a short list of article cards
#[derive(Clone)]
pub struct NewsService {
    feed: Arc<dyn NewsFeed>,
    article_limit: usize,
    excerpt_chars: usize,
}

impl NewsService {
    pub fn new(feed: Arc<dyn NewsFeed>, article_limit: usize, excerpt_chars: usize) -> Self {
        Self {
            feed,
            article_limit,
            excerpt_chars,
        }
    }

    pub async fn latest_articles(&self) -> Result<Vec<NewsArticle>, UpstreamError> {
        let items = self.feed.fetch_items().await?;
        tracing::info!("Feed fetched successfully ({} items)", items.len());

        Ok(items
            .into_iter()
            .take(self.article_limit)
            .map(|item| summarize(item, self.excerpt_chars))
            .collect())
    }
}

/// Card for a single feed item, with defaults for missing fields
pub fn summarize(item: FeedItem, excerpt_chars: usize) -> NewsArticle {
    let excerpt = item
        .description
        .as_deref()
        .map(strip_markup)
        .filter(|text| !text.is_empty())
        .map(|text| format!("{}...", truncate_chars(&text, excerpt_chars)))
        .unwrap_or_else(|| "No excerpt available".to_string());

    NewsArticle {
        title: non_empty(item.title).unwrap_or_else(|| "No title".to_string()),
        excerpt,
        url: non_empty(item.link).unwrap_or_else(|| "#".to_string()),
        pub_date: item.pub_date.unwrap_or_default(),
    }
}

/// Plain text of an HTML fragment: tags removed, entities decoded,
/// whitespace collapsed
pub fn strip_markup(html: &str) -> String {
    static TAG: OnceLock<Regex> = OnceLock::new();
    let tag = TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));

    let text = tag.replace_all(html, " ");
    let text = html_escape::decode_html_entities(&text);

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// At most `max` characters, cut on a char boundary
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
