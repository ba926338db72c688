//! Chart response parsing.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use quoteline_types::{RawField, RawPricePoint, RowKey};
use serde::Deserialize;
use thiserror::Error;

/// Chart error code for unknown or delisted symbols.
const NOT_FOUND: &str = "Not Found";

/// Errors that can occur while parsing a chart response.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Body is not a chart document.
    #[error("Malformed chart response: {0}")]
    Json(#[from] serde_json::Error),

    /// The chart API reported an error.
    #[error("Chart error {code}: {description}")]
    Chart {
        /// Provider error code.
        code: String,
        /// Provider error message.
        description: String,
    },
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    meta: Option<ChartMeta>,
    timestamp: Option<Vec<i64>>,
    indicators: Option<Indicators>,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    gmtoffset: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteData>,
}

#[derive(Debug, Default, Deserialize)]
struct QuoteData {
    #[serde(default)]
    open: Vec<Option<RawField>>,
    #[serde(default)]
    high: Vec<Option<RawField>>,
    #[serde(default)]
    low: Vec<Option<RawField>>,
    #[serde(default)]
    close: Vec<Option<RawField>>,
    #[serde(default)]
    volume: Vec<Option<RawField>>,
}

impl QuoteData {
    fn row(&self, i: usize, key: RowKey) -> RawPricePoint {
        let field = |values: &[Option<RawField>]| values.get(i).cloned().flatten();
        RawPricePoint {
            key,
            open: field(&self.open),
            high: field(&self.high),
            low: field(&self.low),
            close: field(&self.close),
            volume: field(&self.volume),
        }
    }
}

/// Parses a chart response body into raw daily rows, in provider order.
///
/// Row keys are the bar timestamps shifted into the exchange's UTC offset, so
/// they format as the local trading date. A timestamp outside the supported
/// range is kept as text. Quote arrays shorter than the timestamp array leave
/// the missing fields empty.
///
/// An unknown symbol, or a response without result or timestamps, yields an
/// empty series.
///
/// # Errors
///
/// Returns an error if the body is not a chart document, or the chart API
/// reported an error other than "Not Found".
pub fn parse_chart(body: &[u8]) -> Result<Vec<RawPricePoint>, ParseError> {
    let response: ChartResponse = serde_json::from_slice(body)?;

    let Some(results) = response.chart.result else {
        return match response.chart.error {
            Some(err) if err.code != NOT_FOUND => Err(ParseError::Chart {
                code: err.code,
                description: err.description,
            }),
            _ => Ok(Vec::new()),
        };
    };

    let Some(data) = results.into_iter().next() else {
        return Ok(Vec::new());
    };

    let Some(timestamps) = data.timestamp else {
        return Ok(Vec::new());
    };

    let offset = data
        .meta
        .and_then(|meta| meta.gmtoffset)
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Utc.fix());

    let quote = data
        .indicators
        .and_then(|indicators| indicators.quote.into_iter().next())
        .unwrap_or_default();

    let rows = timestamps
        .iter()
        .enumerate()
        .map(|(i, &ts)| {
            let key = DateTime::from_timestamp(ts, 0).map_or_else(
                || RowKey::Text(ts.to_string()),
                |dt| RowKey::Timestamp(dt.with_timezone(&offset)),
            );
            quote.row(i, key)
        })
        .collect();

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const AAPL_CHART: &str = r#"{
        "chart": {
            "result": [{
                "meta": {"currency": "USD", "symbol": "AAPL", "gmtoffset": -14400},
                "timestamp": [1682947800, 1683034200],
                "indicators": {
                    "quote": [{
                        "open": [169.27999877929688, 167.8800048828125],
                        "high": [170.4499969482422, 168.16000366210938],
                        "low": [168.63999938964844, 165.5399932861328],
                        "close": [169.58999633789062, 168.5399932861328],
                        "volume": [52472900, 48425700]
                    }],
                    "adjclose": [{"adjclose": [168.4, 167.4]}]
                }
            }],
            "error": null
        }
    }"#;

    #[test]
    fn test_parse_chart() {
        let rows = parse_chart(AAPL_CHART.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);

        let first = &rows[0];
        assert_eq!(first.key.date_string(), "2023-05-01");
        assert_eq!(first.open, Some(RawField::Float(169.27999877929688)));
        assert_eq!(first.volume, Some(RawField::Integer(52_472_900)));
        assert_eq!(rows[1].key.date_string(), "2023-05-02");
    }

    #[test]
    fn test_gmtoffset_shifts_date() {
        // 2023-05-02 02:00 UTC is still May 1st in New York.
        let body = r#"{"chart":{"result":[{
            "meta":{"gmtoffset":-14400},
            "timestamp":[1682992800],
            "indicators":{"quote":[{"open":[1.0],"close":[1.0]}]}
        }],"error":null}}"#;
        let rows = parse_chart(body.as_bytes()).unwrap();
        assert_eq!(rows[0].key.date_string(), "2023-05-01");

        let utc_body = body.replace("-14400", "0");
        let rows = parse_chart(utc_body.as_bytes()).unwrap();
        assert_eq!(rows[0].key.date_string(), "2023-05-02");
    }

    #[test]
    fn test_ragged_quote_arrays() {
        let body = r#"{"chart":{"result":[{
            "timestamp":[1682947800, 1683034200, 1683120600],
            "indicators":{"quote":[{
                "open":[1.0, null, 3.0],
                "close":[1.5, 2.5],
                "volume":[]
            }]}
        }],"error":null}}"#;
        let rows = parse_chart(body.as_bytes()).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].open, None);
        assert_eq!(rows[2].close, None);
        assert!(rows.iter().all(|r| r.volume.is_none() && r.high.is_none()));
    }

    #[test]
    fn test_not_found_is_empty() {
        let body = r#"{"chart":{"result":null,"error":{
            "code":"Not Found","description":"No data found, symbol may be delisted"}}}"#;
        assert!(parse_chart(body.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_other_chart_error() {
        let body = r#"{"chart":{"result":null,"error":{
            "code":"Bad Request","description":"Invalid input"}}}"#;
        let err = parse_chart(body.as_bytes()).unwrap_err();
        assert!(matches!(err, ParseError::Chart { ref code, .. } if code == "Bad Request"));
    }

    #[test]
    fn test_no_timestamps_is_empty() {
        let body = r#"{"chart":{"result":[{
            "meta":{"gmtoffset":-14400},
            "indicators":{"quote":[{}]}
        }],"error":null}}"#;
        assert!(parse_chart(body.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_quote_keeps_rows() {
        let body = r#"{"chart":{"result":[{"timestamp":[1682947800]}],"error":null}}"#;
        let rows = parse_chart(body.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].open.is_none());
    }

    #[test]
    fn test_out_of_range_timestamp_kept_as_text() {
        let body = r#"{"chart":{"result":[{
            "timestamp":[9223372036854775807],
            "indicators":{"quote":[{"open":[1.0],"close":[1.0]}]}
        }],"error":null}}"#;
        let rows = parse_chart(body.as_bytes()).unwrap();
        assert_eq!(rows[0].key, RowKey::Text("9223372036854775807".into()));
        assert_eq!(rows[0].key.date_string(), "9223372036");
    }

    #[test]
    fn test_malformed_body() {
        assert!(matches!(
            parse_chart(b"<html>blocked</html>"),
            Err(ParseError::Json(_))
        ));
    }
}
