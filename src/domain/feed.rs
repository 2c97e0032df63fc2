use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedType {
    Rss,
    Atom,
    Json,
}

impl FeedType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedType::Rss => "rss",
            FeedType::Atom => "atom",
            FeedType::Json => "json",
        }
    }

    /// Map a `<link type="...">` MIME type to a feed type
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "application/rss+xml" => Some(FeedType::Rss),
            "application/atom+xml" => Some(FeedType::Atom),
            "application/feed+json" | "application/json" => Some(FeedType::Json),
            _ => None,
        }
    }
}

/// A feed advertised by (or served at) a probed URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedLink {
    pub url: String,
    pub title: Option<String>,
    pub feed_type: Option<FeedType>,
}

impl FeedLink {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
            feed_type: None,
        }
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn with_feed_type(mut self, feed_type: Option<FeedType>) -> Self {
        self.feed_type = feed_type;
        self
    }
}

/// What a single probe found at one candidate URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResult {
    pub site_title: Option<String>,
    pub feeds: Vec<FeedLink>,
}

impl ProbeResult {
    pub fn new(feeds: Vec<FeedLink>) -> Self {
        Self {
            site_title: None,
            feeds,
        }
    }

    pub fn with_site_title(mut self, site_title: Option<String>) -> Self {
        self.site_title = site_title;
        self
    }

    pub fn feed_urls(&self) -> impl Iterator<Item = &str> {
        self.feeds.iter().map(|f| f.url.as_str())
    }
}
