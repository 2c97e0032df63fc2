pub mod feed;
pub mod report;

pub use feed::{FeedLink, FeedType, ProbeResult};
pub use report::{Counted, DiscoveryReport, ProbeFailure, ProbeOutcome};
