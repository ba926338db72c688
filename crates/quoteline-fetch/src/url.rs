//! Chart endpoint URL construction.

use chrono::{NaiveDate, NaiveTime};
use reqwest::Url;

use crate::{FetchError, HistoryWindow};

/// Default scheme and host of the chart API.
pub const BASE_URL: &str = "https://query2.finance.yahoo.com";

/// Daily bars.
const INTERVAL: &str = "1d";

/// Builds the chart URL for a symbol and history window.
///
/// URL format: `{base}/v8/finance/chart/{SYMBOL}?range=1y&interval=1d` for a
/// trailing period, or `...?period1={start}&period2={end}&interval=1d` for an
/// explicit range, where the bounds are UTC-midnight Unix timestamps and the
/// end is exclusive.
///
/// # Example
///
/// ```
/// use quoteline_fetch::HistoryWindow;
/// use quoteline_fetch::url::{BASE_URL, chart_url};
/// use quoteline_types::Period;
///
/// let url = chart_url(BASE_URL, "AAPL", HistoryWindow::Period(Period::OneYear)).unwrap();
/// assert_eq!(
///     url.as_str(),
///     "https://query2.finance.yahoo.com/v8/finance/chart/AAPL?range=1y&interval=1d&includePrePost=false"
/// );
/// ```
///
/// # Errors
///
/// Returns an error if `base` is not a valid base URL.
pub fn chart_url(base: &str, symbol: &str, window: HistoryWindow) -> Result<Url, FetchError> {
    let mut url = Url::parse(base).map_err(|e| FetchError::InvalidUrl(format!("{base}: {e}")))?;

    url.path_segments_mut()
        .map_err(|()| FetchError::InvalidUrl(base.to_string()))?
        .pop_if_empty()
        .extend(["v8", "finance", "chart", symbol]);

    {
        let mut query = url.query_pairs_mut();
        match window {
            HistoryWindow::Period(period) => {
                query.append_pair("range", period.as_str());
            }
            HistoryWindow::Range(range) => {
                query.append_pair("period1", &midnight_timestamp(range.start).to_string());
                query.append_pair("period2", &midnight_timestamp(range.end).to_string());
            }
        }
        query.append_pair("interval", INTERVAL);
        query.append_pair("includePrePost", "false");
    }

    Ok(url)
}

/// Unix timestamp of UTC midnight at the start of `date`.
fn midnight_timestamp(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}
