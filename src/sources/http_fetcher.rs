use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};

use crate::config::Config;
use crate::errors::{FinderError, FinderResult};
use crate::sources::traits::ContentFetcher;

/// Build the reqwest client shared by the fetcher and the prober.
pub fn build_client(config: &Config) -> Client {
    Client::builder()
        .timeout(config.timeout)
        .user_agent(config.user_agent.as_str())
        .build()
        .unwrap_or_else(|_| Client::new())
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Self {
        Self::with_client(build_client(config))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[async_trait]
impl ContentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FinderResult<String> {
        tracing::debug!(url, "fetching page");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status != StatusCode::OK {
            return Err(FinderError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        match content_type {
            // Decoded with the declared charset, UTF-8 when none is given
            Some(content_type) if is_textual(&content_type) => Ok(response.text().await?),
            Some(_) => Err(FinderError::NonTextBody(url.to_string())),
            None => {
                let bytes = response.bytes().await?;
                String::from_utf8(bytes.to_vec())
                    .map_err(|_| FinderError::NonTextBody(url.to_string()))
            }
        }
    }
}

/// Whether a `Content-Type` describes a body that can be read as a page
fn is_textual(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence.starts_with("text/")
        || essence.ends_with("/xml")
        || essence.ends_with("+xml")
        || essence.ends_with("/json")
        || essence.ends_with("+json")
}
