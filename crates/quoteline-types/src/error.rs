//! Error types for quoteline.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for quoteline operations.
pub type Result<T> = std::result::Result<T, QuotelineError>;

/// Errors that can occur while retrieving and preparing a price series.
#[derive(Error, Debug)]
pub enum QuotelineError {
    /// The data provider could not be reached or answered with an error.
    #[error("Provider error: {0}")]
    Provider(String),

    /// The provider's response could not be understood.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The symbol was empty after normalization.
    #[error("Empty symbol")]
    EmptySymbol,

    /// The requested year lies in the future or outside the calendar.
    #[error("No data available for year {year}")]
    NoDataForYear {
        /// The requested year.
        year: i32,
    },
}

/// Error for invalid date ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Start date is not before end date.
    #[error("Invalid date range: {start} >= {end}")]
    InvalidRange {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },
}

/// Error converting a raw provider field into a number.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoercionError {
    /// A string that does not parse as the target type.
    #[error("cannot parse {0:?} as a number")]
    Unparsable(String),

    /// A float that has no integer representation (NaN, infinite, out of range).
    #[error("{0} has no integer representation")]
    NotIntegral(f64),

    /// A JSON value of a type that never converts (bool, array, object).
    #[error("unsupported value {0}")]
    Unsupported(String),
}
