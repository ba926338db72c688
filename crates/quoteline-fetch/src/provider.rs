//! Price history provider abstraction.
//!
//! The [`HistoryProvider`] trait abstracts over data sources so the service
//! can swap implementations and use mocks in tests.

use async_trait::async_trait;
use quoteline_types::{DateRange, Period, RawPricePoint};
use tracing::debug;

use crate::{ChartClient, ClientConfig, FetchError, parse_chart, url::chart_url};

/// Span of daily history to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryWindow {
    /// Trailing window ending today.
    Period(Period),
    /// Explicit half-open date range.
    Range(DateRange),
}

impl std::fmt::Display for HistoryWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Period(period) => write!(f, "period {period}"),
            Self::Range(range) => write!(f, "range {range}"),
        }
    }
}

/// Source of daily price history.
#[async_trait]
pub trait HistoryProvider: Send + Sync + std::fmt::Debug {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetches the daily rows for `symbol` over `window`, in chronological order.
    ///
    /// Unknown symbols and windows without data yield an empty series.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider could not be queried or answered with
    /// something other than a price series.
    async fn daily_history(
        &self,
        symbol: &str,
        window: HistoryWindow,
    ) -> Result<Vec<RawPricePoint>, FetchError>;
}

/// Yahoo Finance chart API provider.
#[derive(Debug, Clone)]
pub struct YahooProvider {
    client: ChartClient,
}

impl YahooProvider {
    /// Creates a provider with the given client configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: ChartClient::new(config)?,
        })
    }

    /// Creates a provider with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }
}

#[async_trait]
impl HistoryProvider for YahooProvider {
    fn name(&self) -> &str {
        "yahoo_finance"
    }

    async fn daily_history(
        &self,
        symbol: &str,
        window: HistoryWindow,
    ) -> Result<Vec<RawPricePoint>, FetchError> {
        let url = chart_url(&self.client.config().base_url, symbol, window)?;
        debug!(%url, "requesting chart");

        match self.client.download(url.as_str()).await? {
            Some(body) => Ok(parse_chart(&body)?),
            None => {
                debug!(symbol, "chart not found");
                Ok(Vec::new())
            }
        }
    }
}
