use async_trait::async_trait;

use crate::domain::ProbeResult;
use crate::errors::FinderResult;

/// Retrieves the textual content of a page.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    /// Fetch `url` and return its body as text
    async fn fetch(&self, url: &str) -> FinderResult<String>;
}

/// Determines which feeds, if any, a URL exposes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedProber: Send + Sync {
    /// Probe a single URL; an error means the URL could not be probed at all
    async fn probe(&self, url: &str) -> FinderResult<ProbeResult>;
}
