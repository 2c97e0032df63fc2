use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinderError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Argument errors
    #[error("{0} is not a valid url")]
    InvalidUrl(String),

    #[error("Invalid params in {0}")]
    InvalidParams(&'static str),

    #[error("No rootUrl to process in keepSameRootDomainLink")]
    NoRootUrl,

    #[error("No urls to process in keepSameRootDomainLink")]
    NoUrls,

    #[error("No urls for extract rss feeds")]
    NoCandidates,

    // Network errors
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} : {status} {reason}")]
    HttpStatus {
        url: String,
        status: u16,
        reason: String,
    },

    #[error("{0} : body response is not a string")]
    NonTextBody(String),

    // Probe errors
    #[error("Feed parsing failed: {0}")]
    FeedParse(String),

    /// A prober rejection reported with its own message
    #[error("{0}")]
    Probe(String),


    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FinderError {
    /// Errors that abort a whole discovery run because the page itself could
    /// not be retrieved.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            FinderError::Http(_) | FinderError::HttpStatus { .. } | FinderError::NonTextBody(_)
        )
    }

    /// Precondition violations raised by the pipeline stages.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            FinderError::InvalidUrl(_)
                | FinderError::InvalidParams(_)
                | FinderError::NoRootUrl
                | FinderError::NoUrls
                | FinderError::NoCandidates
        )
    }
}

pub type FinderResult<T> = Result<T, FinderError>;
