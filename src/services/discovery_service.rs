use crate::config::Config;
use crate::domain::DiscoveryReport;
use crate::errors::{FinderError, FinderResult};
use crate::links::{dedupe, extract_links, filter_same_domain};
use crate::services::probe_service::probe_all;
use crate::sources::{ContentFetcher, FeedProber, HttpFeedProber, HttpFetcher};

/// The end-to-end discovery pipeline for one root page.
///
/// Holds no per-run state, so one instance can serve concurrent runs.
pub struct Discovery {
    fetcher: Box<dyn ContentFetcher>,
    prober: Box<dyn FeedProber>,
}

impl Discovery {
    pub fn new(fetcher: Box<dyn ContentFetcher>, prober: Box<dyn FeedProber>) -> Self {
        Self { fetcher, prober }
    }

    /// Wire the HTTP implementations of both collaborators
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Box::new(HttpFetcher::new(config)),
            Box::new(HttpFeedProber::new(config)),
        )
    }

    /// Fetch the root page and return its unique same-domain links
    pub async fn candidates(&self, root_url: &str) -> FinderResult<Vec<String>> {
        if root_url.trim().is_empty() {
            return Err(FinderError::InvalidUrl(root_url.to_string()));
        }

        let content = self.fetcher.fetch(root_url).await?;
        let links = extract_links(&content);
        let same_domain = filter_same_domain(root_url, &links)?;

        Ok(dedupe(same_domain))
    }

    /// Run the whole pipeline: candidates, probing, then the report
    pub async fn discover(&self, root_url: &str) -> FinderResult<DiscoveryReport> {
        let candidates = self.candidates(root_url).await?;
        let outcome = probe_all(self.prober.as_ref(), &candidates).await?;

        Ok(DiscoveryReport::new(
            dedupe(outcome.all_feeds),
            outcome.all_errors,
        ))
    }
}
