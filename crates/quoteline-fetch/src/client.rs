//! HTTP client for the chart endpoint.

use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

use crate::ParseError;

/// Configuration for the chart client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
    /// Scheme and host of the chart API.
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            // The chart endpoint rejects obviously non-browser agents
            user_agent: format!(
                "Mozilla/5.0 (X11; Linux x86_64) quoteline/{}",
                env!("CARGO_PKG_VERSION")
            ),
            base_url: crate::url::BASE_URL.to_string(),
        }
    }
}

/// Errors that can occur while fetching history.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error status.
    #[error("Server error: {status}")]
    ServerError {
        /// HTTP status code.
        status: u16,
    },

    /// The configured base URL cannot carry a chart path.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Response body could not be interpreted.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// HTTP client with connection pooling.
///
/// Each request is attempted once; failures are returned to the caller.
#[derive(Debug, Clone)]
pub struct ChartClient {
    client: Client,
    config: ClientConfig,
}

impl ChartClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches a URL, returning the response body.
    ///
    /// Returns `Ok(None)` if the resource does not exist (404).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failures and non-success statuses.
    pub async fn download(&self, url: &str) -> Result<Option<Bytes>, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            return Err(FetchError::ServerError {
                status: status.as_u16(),
            });
        }

        Ok(Some(response.bytes().await?))
    }
}
