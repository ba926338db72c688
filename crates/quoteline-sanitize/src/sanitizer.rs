//! Row-by-row validation of provider price series.

use quoteline_types::{PricePoint, RawField, RawPricePoint};
use tracing::{debug, trace};

use crate::{Field, Rejection};

/// Validates a single provider row.
///
/// The checks run in a fixed order: the date key is formatted first, then
/// `open` and `close` must be present, numeric, finite, and strictly positive.
/// `high`, `low`, and `volume` are optional, but a present value that cannot
/// be coerced rejects the whole row. Non-finite `high`/`low` values become
/// `None`, since they have no JSON representation.
///
/// # Errors
///
/// Returns the first [`Rejection`] encountered.
pub fn clean_row(row: &RawPricePoint) -> Result<PricePoint, Rejection> {
    let date = row.key.date_string();

    let open = row.open.as_ref().ok_or(Rejection::Missing(Field::Open))?;
    let close = row.close.as_ref().ok_or(Rejection::Missing(Field::Close))?;

    let open = positive_price(open, Field::Open)?;
    let close = positive_price(close, Field::Close)?;

    let high = optional_price(row.high.as_ref(), Field::High)?;
    let low = optional_price(row.low.as_ref(), Field::Low)?;
    let volume = row
        .volume
        .as_ref()
        .map(|v| {
            v.to_i64().map_err(|source| Rejection::Invalid {
                field: Field::Volume,
                source,
            })
        })
        .transpose()?;

    Ok(PricePoint {
        date,
        open,
        close,
        high,
        low,
        volume,
    })
}

fn coerce(value: &RawField, field: Field) -> Result<f64, Rejection> {
    value
        .to_f64()
        .map_err(|source| Rejection::Invalid { field, source })
}

fn positive_price(value: &RawField, field: Field) -> Result<f64, Rejection> {
    let price = coerce(value, field)?;
    if price.is_finite() && price > 0.0 {
        Ok(price)
    } else {
        Err(Rejection::NotPositive {
            field,
            value: price,
        })
    }
}

fn optional_price(value: Option<&RawField>, field: Field) -> Result<Option<f64>, Rejection> {
    match value {
        Some(v) => Ok(Some(coerce(v, field)?).filter(|p| p.is_finite())),
        None => Ok(None),
    }
}

/// Counters describing one sanitizing pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SanitizeStats {
    /// Rows emitted.
    pub kept: usize,
    /// Rows dropped because `open` or `close` was absent.
    pub missing: usize,
    /// Rows dropped because a field failed to coerce.
    pub invalid: usize,
    /// Rows dropped because `open` or `close` was not positive.
    pub not_positive: usize,
}

impl SanitizeStats {
    /// Returns the total number of dropped rows.
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.missing + self.invalid + self.not_positive
    }

    /// Returns the total number of rows seen.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.kept + self.dropped()
    }

    const fn record(&mut self, rejection: &Rejection) {
        match rejection {
            Rejection::Missing(_) => self.missing += 1,
            Rejection::Invalid { .. } => self.invalid += 1,
            Rejection::NotPositive { .. } => self.not_positive += 1,
        }
    }
}

/// Streaming sanitizer.
///
/// Feeds rows one at a time, emitting the ones that pass validation and
/// counting the ones that do not. A rejected row never affects its siblings.
#[derive(Debug, Default)]
pub struct RowSanitizer {
    stats: SanitizeStats,
}

impl RowSanitizer {
    /// Creates a new sanitizer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes a row, returning the cleaned point if it is valid.
    pub fn process(&mut self, row: &RawPricePoint) -> Option<PricePoint> {
        match clean_row(row) {
            Ok(point) => {
                self.stats.kept += 1;
                Some(point)
            }
            Err(rejection) => {
                trace!(key = ?row.key, %rejection, "dropping row");
                self.stats.record(&rejection);
                None
            }
        }
    }

    /// Returns the counters accumulated so far.
    #[must_use]
    pub const fn stats(&self) -> SanitizeStats {
        self.stats
    }
}

/// Sanitizes a series, preserving input order and dropping invalid rows.
///
/// ```
/// use chrono::NaiveDate;
/// use quoteline_sanitize::sanitize;
/// use quoteline_types::{RawPricePoint, RowKey};
///
/// let day = RowKey::Date(NaiveDate::from_ymd_opt(2023, 5, 1).unwrap());
/// let rows = vec![
///     RawPricePoint::new(day.clone()).with_open(150.0).with_close(152.3),
///     RawPricePoint::new(day).with_open(0.0).with_close(152.3),
/// ];
///
/// let clean = sanitize(&rows);
/// assert_eq!(clean.len(), 1);
/// assert_eq!(clean[0].date, "2023-05-01");
/// ```
pub fn sanitize<'a, I>(rows: I) -> Vec<PricePoint>
where
    I: IntoIterator<Item = &'a RawPricePoint>,
{
    let mut sanitizer = RowSanitizer::new();
    let points: Vec<PricePoint> = rows
        .into_iter()
        .filter_map(|row| sanitizer.process(row))
        .collect();

    let stats = sanitizer.stats();
    if stats.dropped() > 0 {
        debug!(
            kept = stats.kept,
            missing = stats.missing,
            invalid = stats.invalid,
            not_positive = stats.not_positive,
            "dropped invalid rows"
        );
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use quoteline_types::{CoercionError, RowKey};

    fn key(day: u32) -> RowKey {
        RowKey::Date(NaiveDate::from_ymd_opt(2023, 5, day).unwrap())
    }

    fn full_row(day: u32, open: f64, close: f64) -> RawPricePoint {
        RawPricePoint::new(key(day))
            .with_open(open)
            .with_close(close)
            .with_high(close.max(open) + 1.0)
            .with_low(close.min(open) - 1.0)
            .with_volume(1_000_i64)
    }

    #[test]
    fn test_valid_row_passthrough() {
        let row = RawPricePoint::new(key(1))
            .with_open(150.0)
            .with_close(152.3)
            .with_high(153.0)
            .with_low(149.5)
            .with_volume(1_000_000_i64);

        let point = clean_row(&row).unwrap();
        assert_eq!(point.date, "2023-05-01");
        assert_eq!(point.open, 150.0);
        assert_eq!(point.close, 152.3);
        assert_eq!(point.high, Some(153.0));
        assert_eq!(point.low, Some(149.5));
        assert_eq!(point.volume, Some(1_000_000));
    }

    #[test]
    fn test_zero_open_dropped() {
        let row = full_row(1, 0.0, 10.0);
        assert!(matches!(
            clean_row(&row),
            Err(Rejection::NotPositive {
                field: Field::Open,
                ..
            })
        ));
    }

    #[test]
    fn test_negative_open_dropped() {
        let row = full_row(1, -5.0, 10.0);
        assert!(clean_row(&row).is_err());
    }

    #[test]
    fn test_non_positive_close_dropped() {
        let row = full_row(1, 10.0, 0.0);
        assert_eq!(clean_row(&row).unwrap_err().field(), Field::Close);
    }

    #[test]
    fn test_missing_open_dropped() {
        let row = RawPricePoint::new(key(1)).with_close(10.0);
        assert_eq!(clean_row(&row), Err(Rejection::Missing(Field::Open)));
    }

    #[test]
    fn test_missing_close_dropped() {
        let row = RawPricePoint::new(key(1)).with_open(10.0);
        assert_eq!(clean_row(&row), Err(Rejection::Missing(Field::Close)));
    }

    #[test]
    fn test_non_finite_open_dropped() {
        assert!(clean_row(&full_row(1, f64::NAN, 10.0)).is_err());
        assert!(clean_row(&full_row(1, f64::INFINITY, 10.0)).is_err());
    }

    #[test]
    fn test_string_prices_coerced() {
        let row = RawPricePoint::new(key(2))
            .with_open("101.5")
            .with_close(" 102 ")
            .with_volume("250");

        let point = clean_row(&row).unwrap();
        assert_relative_eq!(point.open, 101.5);
        assert_relative_eq!(point.close, 102.0);
        assert_eq!(point.volume, Some(250));
    }

    #[test]
    fn test_unparsable_open_dropped() {
        let row = RawPricePoint::new(key(1))
            .with_open("n/a")
            .with_close(10.0);
        assert_eq!(
            clean_row(&row),
            Err(Rejection::Invalid {
                field: Field::Open,
                source: CoercionError::Unparsable("n/a".into()),
            })
        );
    }

    #[test]
    fn test_bad_optional_field_drops_row() {
        let bad_high = full_row(1, 10.0, 11.0).with_high("high");
        assert_eq!(clean_row(&bad_high).unwrap_err().field(), Field::High);

        let bad_low = full_row(1, 10.0, 11.0).with_low("low");
        assert_eq!(clean_row(&bad_low).unwrap_err().field(), Field::Low);

        let nan_volume = full_row(1, 10.0, 11.0).with_volume(f64::NAN);
        assert_eq!(clean_row(&nan_volume).unwrap_err().field(), Field::Volume);
    }

    #[test]
    fn test_optional_fields_absent() {
        let row = RawPricePoint::new(key(3)).with_open(5.0).with_close(6.0);
        let point = clean_row(&row).unwrap();
        assert_eq!(point.high, None);
        assert_eq!(point.low, None);
        assert_eq!(point.volume, None);
    }

    #[test]
    fn test_non_finite_high_becomes_none() {
        let row = full_row(1, 10.0, 11.0).with_high(f64::NAN);
        let point = clean_row(&row).unwrap();
        assert_eq!(point.high, None);
        assert_eq!(point.low, Some(9.0));
    }

    #[test]
    fn test_fractional_volume_truncated() {
        let row = full_row(1, 10.0, 11.0).with_volume(1234.9);
        assert_eq!(clean_row(&row).unwrap().volume, Some(1234));
    }

    #[test]
    fn test_text_key_fallback() {
        let row = RawPricePoint::new(RowKey::Text("not-a-date-at-all".into()))
            .with_open(1.0)
            .with_close(1.0);
        assert_eq!(clean_row(&row).unwrap().date, "not-a-date");
    }

    #[test]
    fn test_sanitize_preserves_order_and_duplicates() {
        let rows = vec![
            full_row(3, 10.0, 11.0),
            full_row(1, 0.0, 11.0),
            full_row(2, 12.0, 13.0),
            full_row(2, 12.0, 13.0),
        ];

        let clean = sanitize(&rows);
        let dates: Vec<_> = clean.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, ["2023-05-03", "2023-05-02", "2023-05-02"]);
    }

    #[test]
    fn test_sanitize_empty() {
        assert!(sanitize(&Vec::<RawPricePoint>::new()).is_empty());
    }

    #[test]
    fn test_streaming_stats() {
        let rows = vec![
            full_row(1, 10.0, 11.0),
            RawPricePoint::new(key(2)).with_close(1.0),
            full_row(3, 10.0, 11.0).with_volume("x"),
            full_row(4, -1.0, 11.0),
            full_row(5, 10.0, 11.0),
        ];

        let mut sanitizer = RowSanitizer::new();
        let kept: Vec<_> = rows.iter().filter_map(|r| sanitizer.process(r)).collect();

        assert_eq!(kept.len(), 2);
        let stats = sanitizer.stats();
        assert_eq!(stats.kept, 2);
        assert_eq!(stats.missing, 1);
        assert_eq!(stats.invalid, 1);
        assert_eq!(stats.not_positive, 1);
        assert_eq!(stats.dropped(), 3);
        assert_eq!(stats.total(), 5);
    }
}
