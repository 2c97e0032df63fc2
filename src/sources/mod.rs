pub mod feed_probe;
pub mod http_fetcher;
pub mod traits;

pub use feed_probe::HttpFeedProber;
pub use http_fetcher::HttpFetcher;
pub use traits::{ContentFetcher, FeedProber};
