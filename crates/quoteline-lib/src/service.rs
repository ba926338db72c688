//! Price lookup pipeline.

use std::sync::Arc;

use quoteline_fetch::{FetchError, HistoryProvider, HistoryWindow};
use quoteline_sanitize::sanitize;
use quoteline_types::{
    DateRange, Period, PricePoint, QuotelineError, Result, normalize_symbol,
};
use tracing::{debug, warn};

/// Resolves symbols and years into cleaned daily price series.
#[derive(Debug, Clone)]
pub struct PriceService {
    provider: Arc<dyn HistoryProvider>,
}

impl PriceService {
    /// Creates a service backed by `provider`.
    #[must_use]
    pub fn new(provider: Arc<dyn HistoryProvider>) -> Self {
        Self { provider }
    }

    /// Name of the underlying provider.
    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Fetches and sanitizes the daily series for `symbol`.
    ///
    /// With a `year`, the window is that calendar year clamped to tomorrow.
    /// Without one, it is the trailing year.
    ///
    /// # Errors
    ///
    /// Returns [`QuotelineError::EmptySymbol`] for a blank symbol,
    /// [`QuotelineError::NoDataForYear`] for a year that has not started,
    /// and provider errors as they occur.
    pub async fn try_prices(&self, symbol: &str, year: Option<i32>) -> Result<Vec<PricePoint>> {
        let symbol = normalize_symbol(symbol).ok_or(QuotelineError::EmptySymbol)?;
        let window = match year {
            Some(year) => {
                let range = DateRange::for_year(year).ok_or(QuotelineError::NoDataForYear { year })?;
                HistoryWindow::Range(range)
            }
            None => HistoryWindow::Period(Period::OneYear),
        };
        self.fetch(&symbol, window).await
    }

    /// Fetches and sanitizes the daily series for `symbol` over an explicit window.
    ///
    /// # Errors
    ///
    /// Returns [`QuotelineError::EmptySymbol`] for a blank symbol and
    /// provider errors as they occur.
    pub async fn try_prices_in(
        &self,
        symbol: &str,
        window: HistoryWindow,
    ) -> Result<Vec<PricePoint>> {
        let symbol = normalize_symbol(symbol).ok_or(QuotelineError::EmptySymbol)?;
        self.fetch(&symbol, window).await
    }

    async fn fetch(&self, symbol: &str, window: HistoryWindow) -> Result<Vec<PricePoint>> {
        debug!(%symbol, %window, provider = self.provider.name(), "fetching history");

        let rows = self
            .provider
            .daily_history(symbol, window)
            .await
            .map_err(into_quoteline_error)?;

        Ok(sanitize(&rows))
    }

    /// Like [`try_prices`](Self::try_prices), but never fails.
    ///
    /// Every error is logged and answered with an empty series. A panicking
    /// provider still unwinds through this call; the HTTP router turns that
    /// into an empty series.
    pub async fn get_prices(&self, symbol: &str, year: Option<i32>) -> Vec<PricePoint> {
        match self.try_prices(symbol, year).await {
            Ok(points) => points,
            Err(e @ (QuotelineError::EmptySymbol | QuotelineError::NoDataForYear { .. })) => {
                debug!(symbol, ?year, "{e}");
                Vec::new()
            }
            Err(e) => {
                warn!(symbol, ?year, error = %e, "price lookup failed");
                Vec::new()
            }
        }
    }
}

fn into_quoteline_error(err: FetchError) -> QuotelineError {
    match err {
        FetchError::Parse(e) => QuotelineError::Parse(e.to_string()),
        other => QuotelineError::Provider(other.to_string()),
    }
}
