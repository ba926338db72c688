//! Daily price rows, before and after validation.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::CoercionError;

/// Index key of a provider row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKey {
    /// A timestamp in the exchange's local offset.
    Timestamp(DateTime<FixedOffset>),
    /// A plain calendar date.
    Date(NaiveDate),
    /// A key the provider handed back in a form that is not date-like.
    Text(String),
}

impl RowKey {
    /// Formats the key as `YYYY-MM-DD`.
    ///
    /// Keys that are not date-like fall back to the first 10 characters of
    /// their text, which is not guaranteed to be a calendar date.
    #[must_use]
    pub fn date_string(&self) -> String {
        match self {
            Self::Timestamp(ts) => ts.format("%Y-%m-%d").to_string(),
            Self::Date(date) => date.format("%Y-%m-%d").to_string(),
            Self::Text(text) => text.chars().take(10).collect(),
        }
    }
}

impl From<NaiveDate> for RowKey {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<DateTime<FixedOffset>> for RowKey {
    fn from(ts: DateTime<FixedOffset>) -> Self {
        Self::Timestamp(ts)
    }
}

/// A single field value as the provider delivered it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    /// Integral JSON number.
    Integer(i64),
    /// Any other JSON number.
    Float(f64),
    /// Numeric value encoded as a string.
    Text(String),
    /// Anything else (bool, array, object).
    Other(serde_json::Value),
}

impl RawField {
    /// Coerces the value to a float.
    ///
    /// Strings are trimmed and parsed; NaN and infinities parse successfully
    /// and are left for the caller to judge.
    ///
    /// # Errors
    ///
    /// Returns an error for unparsable strings and non-numeric JSON values.
    pub fn to_f64(&self) -> Result<f64, CoercionError> {
        match self {
            Self::Integer(v) => Ok(*v as f64),
            Self::Float(v) => Ok(*v),
            Self::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| CoercionError::Unparsable(s.clone())),
            Self::Other(v) => Err(CoercionError::Unsupported(v.to_string())),
        }
    }

    /// Coerces the value to an integer.
    ///
    /// Floats truncate toward zero. Strings must hold an integer literal.
    ///
    /// # Errors
    ///
    /// Returns an error for non-finite or out-of-range floats, strings that are
    /// not integer literals, and non-numeric JSON values.
    pub fn to_i64(&self) -> Result<i64, CoercionError> {
        match self {
            Self::Integer(v) => Ok(*v),
            Self::Float(v) => {
                if v.is_finite() && *v >= i64::MIN as f64 && *v < i64::MAX as f64 {
                    Ok(v.trunc() as i64)
                } else {
                    Err(CoercionError::NotIntegral(*v))
                }
            }
            Self::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| CoercionError::Unparsable(s.clone())),
            Self::Other(v) => Err(CoercionError::Unsupported(v.to_string())),
        }
    }
}

impl From<f64> for RawField {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<i64> for RawField {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<&str> for RawField {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

/// Daily row as returned by a data provider, before validation.
///
/// Every field is optional and may hold a malformed value.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPricePoint {
    /// Row index key.
    pub key: RowKey,
    /// Opening price.
    pub open: Option<RawField>,
    /// Highest price.
    pub high: Option<RawField>,
    /// Lowest price.
    pub low: Option<RawField>,
    /// Closing price.
    pub close: Option<RawField>,
    /// Traded volume.
    pub volume: Option<RawField>,
}

impl RawPricePoint {
    /// Creates a row with the given key and no fields.
    #[must_use]
    pub const fn new(key: RowKey) -> Self {
        Self {
            key,
            open: None,
            high: None,
            low: None,
            close: None,
            volume: None,
        }
    }

    /// Sets the opening price.
    #[must_use]
    pub fn with_open(mut self, value: impl Into<RawField>) -> Self {
        self.open = Some(value.into());
        self
    }

    /// Sets the highest price.
    #[must_use]
    pub fn with_high(mut self, value: impl Into<RawField>) -> Self {
        self.high = Some(value.into());
        self
    }

    /// Sets the lowest price.
    #[must_use]
    pub fn with_low(mut self, value: impl Into<RawField>) -> Self {
        self.low = Some(value.into());
        self
    }

    /// Sets the closing price.
    #[must_use]
    pub fn with_close(mut self, value: impl Into<RawField>) -> Self {
        self.close = Some(value.into());
        self
    }

    /// Sets the traded volume.
    #[must_use]
    pub fn with_volume(mut self, value: impl Into<RawField>) -> Self {
        self.volume = Some(value.into());
        self
    }
}

/// Validated daily price row.
///
/// `open` and `close` are always strictly positive; the remaining fields are
/// passed through when the provider supplied them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading date, `YYYY-MM-DD`.
    pub date: String,
    /// Opening price.
    pub open: f64,
    /// Closing price.
    pub close: f64,
    /// Highest price, if known.
    pub high: Option<f64>,
    /// Lowest price, if known.
    pub low: Option<f64>,
    /// Traded volume, if known.
    pub volume: Option<i64>,
}
