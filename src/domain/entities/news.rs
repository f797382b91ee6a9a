use serde::{Deserialize, Serialize};

/// One `<item>` of an RSS channel, as parsed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
    pub pub_date: Option<String>,
}

/// Article summary served to the news card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewsArticle {
    pub title: String,
    pub excerpt: String,
    pub url: String,
    #[serde(rename = "pubDate")]
    pub pub_date: String,
}
