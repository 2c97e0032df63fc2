use crate::domain::{ProbeFailure, ProbeOutcome};
use crate::errors::{FinderError, FinderResult};
use crate::sources::FeedProber;

/// Probe every candidate URL, one at a time, and flatten what was found.
///
/// A failing probe never stops the loop: its error is recorded against the
/// URL and the next candidate is probed. Feeds are returned with their
/// multiplicity; deduplication is left to the caller.
pub async fn probe_all<P>(prober: &P, urls: &[String]) -> FinderResult<ProbeOutcome>
where
    P: FeedProber + ?Sized,
{
    if urls.is_empty() {
        return Err(FinderError::NoCandidates);
    }

    let mut outcome = ProbeOutcome::default();

    for url in urls {
        match prober.probe(url).await {
            Ok(result) => {
                outcome
                    .all_feeds
                    .extend(result.feed_urls().map(str::to_string));
            }
            Err(e) => {
                outcome.all_errors.push(ProbeFailure::new(url, &e));
            }
        }
    }

    Ok(outcome)
}
