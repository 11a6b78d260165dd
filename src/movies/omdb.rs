//! OMDb lookup over HTTP.
//!
//! Every failure is absorbed here and turned into an error `Movie`, so the
//! state container only ever sees data.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use thiserror::Error;

use crate::config::OmdbConfig;

use super::model::Movie;
use super::search::MovieSearch;

/// Message used when the lookup failed without a usable explanation.
pub const SEARCH_ERROR: &str = "Error searching for movie";

/// Errors that can occur while talking to OMDb.
#[derive(Debug, Error)]
pub enum OmdbError {
    #[error("Invalid OMDb base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to OMDb failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("OMDb returned {status} with an unreadable body")]
    Upstream { status: u16 },

    #[error("Failed to decode OMDb response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl OmdbError {
    /// Connect and timeout failures are worth another attempt.
    fn is_retryable(&self) -> bool {
        match self {
            OmdbError::Transport(err) => err.is_connect() || err.is_timeout(),
            _ => false,
        }
    }
}

/// `MovieSearch` backed by the OMDb title endpoint.
pub struct OmdbClient {
    client: Client,
    base_url: Url,
    api_key: String,
    config: OmdbConfig,
}

impl OmdbClient {
    pub fn new(config: &OmdbConfig) -> Result<Self, OmdbError> {
        let base_url =
            Url::parse(config.base_url.trim()).map_err(|source| OmdbError::InvalidBaseUrl {
                url: config.base_url.clone(),
                source,
            })?;

        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(OmdbError::Client)?;

        Ok(Self {
            client,
            base_url,
            api_key: config.resolved_api_key(),
            config: config.clone(),
        })
    }

    /// Look `title` up, retrying connect/timeout failures with backoff.
    pub async fn fetch(&self, title: &str) -> Result<Movie, OmdbError> {
        let mut attempt = 0;
        loop {
            match self.fetch_once(title).await {
                Err(err) if err.is_retryable() && attempt < self.config.max_retries => {
                    let delay = self.config.retry_backoff(attempt);
                    tracing::debug!(
                        title,
                        attempt = attempt + 1,
                        delay_ms = delay.as_millis() as u64,
                        "Retrying OMDb lookup: {}",
                        err
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    async fn fetch_once(&self, title: &str) -> Result<Movie, OmdbError> {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("t", title)
            .append_pair("apikey", &self.api_key);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(OmdbError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(OmdbError::Transport)?;

        decode_body(status, &body)
    }
}

/// OMDb describes failures in the body for both success and error statuses.
fn decode_body(status: StatusCode, body: &str) -> Result<Movie, OmdbError> {
    match serde_json::from_str::<Movie>(body) {
        Ok(movie) => Ok(movie),
        Err(_) if !status.is_success() => Err(OmdbError::Upstream {
            status: status.as_u16(),
        }),
        Err(err) => Err(OmdbError::Decode(err)),
    }
}

/// A miss must always explain itself.
fn ensure_error_message(mut movie: Movie) -> Movie {
    if !movie.found && !movie.has_error() {
        movie.error_message = Some(SEARCH_ERROR.to_string());
    }
    movie
}

#[async_trait]
impl MovieSearch for OmdbClient {
    async fn search(&self, title: &str) -> Movie {
        match self.fetch(title).await {
            Ok(movie) => ensure_error_message(movie),
            Err(err) => {
                tracing::warn!(title, "Movie search failed: {}", err);
                Movie::error(SEARCH_ERROR)
            }
        }
    }
}
