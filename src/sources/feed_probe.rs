use std::collections::HashSet;

use async_trait::async_trait;
use feed_rs::parser;
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use crate::config::Config;
use crate::domain::{FeedLink, FeedType, ProbeResult};
use crate::errors::{FinderError, FinderResult};
use crate::sources::http_fetcher::build_client;
use crate::sources::traits::FeedProber;

/// Probes a URL over HTTP.
///
/// A URL that serves a feed document is its own single feed. Otherwise the
/// body is read as HTML and every `<link rel="alternate">` with a feed MIME
/// type is reported, resolved against the probed URL.
pub struct HttpFeedProber {
    client: Client,
}

impl HttpFeedProber {
    pub fn new(config: &Config) -> Self {
        Self::with_client(build_client(config))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    async fn fetch_bytes(&self, url: &str) -> FinderResult<Vec<u8>> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FinderError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    fn parse_bytes(bytes: &[u8]) -> FinderResult<feed_rs::model::Feed> {
        parser::parse(bytes).map_err(|e| FinderError::FeedParse(e.to_string()))
    }

    fn determine_feed_type(feed: &feed_rs::model::Feed) -> FeedType {
        match feed.feed_type {
            feed_rs::model::FeedType::Atom => FeedType::Atom,
            feed_rs::model::FeedType::JSON => FeedType::Json,
            _ => FeedType::Rss,
        }
    }

    /// Collect the feeds a page advertises in its `<head>`
    fn feeds_from_html(html: &str, base: &Url) -> ProbeResult {
        let document = Html::parse_document(html);

        let site_title = Selector::parse("title").ok().and_then(|selector| {
            document
                .select(&selector)
                .next()
                .map(|title| title.text().collect::<String>().trim().to_string())
                .filter(|title| !title.is_empty())
        });

        let selector = match Selector::parse("link[rel][type][href]") {
            Ok(selector) => selector,
            Err(_) => return ProbeResult::default().with_site_title(site_title),
        };

        let mut seen = HashSet::new();
        let mut feeds = Vec::new();

        for element in document.select(&selector) {
            let attrs = element.value();

            let is_alternate = attrs
                .attr("rel")
                .map(|rel| {
                    rel.split_ascii_whitespace()
                        .any(|token| token.eq_ignore_ascii_case("alternate"))
                })
                .unwrap_or(false);
            if !is_alternate {
                continue;
            }

            let Some(feed_type) = attrs.attr("type").and_then(FeedType::from_mime) else {
                continue;
            };

            let Some(href) = attrs.attr("href").map(str::trim).filter(|h| !h.is_empty()) else {
                continue;
            };

            let Ok(resolved) = base.join(href) else {
                continue;
            };

            let url = resolved.to_string();
            if !seen.insert(url.clone()) {
                continue;
            }

            let title = attrs
                .attr("title")
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty());

            feeds.push(
                FeedLink::new(url)
                    .with_title(title)
                    .with_feed_type(Some(feed_type)),
            );
        }

        ProbeResult::new(feeds).with_site_title(site_title)
    }
}

impl Default for HttpFeedProber {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[async_trait]
impl FeedProber for HttpFeedProber {
    async fn probe(&self, url: &str) -> FinderResult<ProbeResult> {
        tracing::debug!(url, "probing for feeds");

        let base = Url::parse(url).map_err(|_| FinderError::InvalidUrl(url.to_string()))?;
        let bytes = self.fetch_bytes(url).await?;

        // The URL may already be a feed
        if let Ok(feed) = Self::parse_bytes(&bytes) {
            let feed_type = Self::determine_feed_type(&feed);
            let title = feed.title.map(|t| t.content);

            let result = ProbeResult::new(vec![FeedLink::new(url)
                .with_title(title.clone())
                .with_feed_type(Some(feed_type))])
            .with_site_title(title);
            log_found(url, &result);
            return Ok(result);
        }

        let html = String::from_utf8_lossy(&bytes);
        let result = Self::feeds_from_html(&html, &base);
        log_found(url, &result);

        tracing::debug!(url, feeds = result.feeds.len(), "probe finished");

        Ok(result)
    }
}

fn log_found(url: &str, result: &ProbeResult) {
    let site_title = result.site_title.as_deref().unwrap_or_default();

    for feed in &result.feeds {
        tracing::debug!(
            url,
            site_title,
            feed = %feed.url,
            title = feed.title.as_deref().unwrap_or_default(),
            feed_type = feed.feed_type.map(|t| t.as_str()).unwrap_or("unknown"),
            "feed found"
        );
    }
}
