//! Core types for the quoteline price history service.
//!
//! This crate provides the fundamental data structures used throughout quoteline:
//!
//! - [`DateRange`] - Half-open date range, resolved from a calendar year
//! - [`RawPricePoint`] - A daily row as returned by a data provider
//! - [`PricePoint`] - A validated daily row, ready to serialize
//! - [`Period`] - Trailing history window keyword (`1y`, `6mo`, ...)
//! - [`normalize_symbol`] - Ticker symbol normalization

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod date_range;
mod error;
mod period;
mod price;
mod symbol;

pub use date_range::DateRange;
pub use error::{CoercionError, DateRangeError, QuotelineError, Result};
pub use period::{Period, PeriodParseError};
pub use price::{PricePoint, RawField, RawPricePoint, RowKey};
pub use symbol::normalize_symbol;
