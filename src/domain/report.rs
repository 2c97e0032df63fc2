use serde::{Deserialize, Serialize};

use crate::errors::FinderError;

/// One candidate URL whose probe failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeFailure {
    pub url: String,
    pub message: String,
}

impl ProbeFailure {
    pub fn new(url: &str, error: &FinderError) -> Self {
        Self {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}

/// Flattened result of probing every candidate of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub all_feeds: Vec<String>,
    pub all_errors: Vec<ProbeFailure>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counted<T> {
    pub count: usize,
    pub value: Vec<T>,
}

impl<T> From<Vec<T>> for Counted<T> {
    fn from(value: Vec<T>) -> Self {
        Self {
            count: value.len(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryReport {
    pub rss: Counted<String>,
    pub errors: Counted<ProbeFailure>,
}

impl DiscoveryReport {
    pub fn new(feeds: Vec<String>, errors: Vec<ProbeFailure>) -> Self {
        Self {
            rss: feeds.into(),
            errors: errors.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_report_json_shape() {
        let report = DiscoveryReport::new(
            vec!["https://a.com/rss.xml".to_string()],
            vec![ProbeFailure {
                url: "https://a.com/b".to_string(),
                message: "x".to_string(),
            }],
        );

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value,
            json!({
                "rss": { "count": 1, "value": ["https://a.com/rss.xml"] },
                "errors": {
                    "count": 1,
                    "value": [{ "url": "https://a.com/b", "message": "x" }]
                }
            })
        );
    }

    #[test]
    fn test_failure_keeps_error_message() {
        let failure = ProbeFailure::new("https://a.com/", &FinderError::FeedParse("bad".into()));
        assert_eq!(failure.url, "https://a.com/");
        assert_eq!(failure.message, "Feed parsing failed: bad");
    }
}
