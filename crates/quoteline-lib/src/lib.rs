//! Daily stock price history, fetched, cleaned, and ready to serve.
//!
//! This is a facade crate that re-exports functionality from the quoteline
//! workspace crates and provides [`PriceService`], the request pipeline.
//!
//! # Quick Start
//!
//! ```ignore
//! use quoteline_lib::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = Arc::new(YahooProvider::with_defaults()?);
//!     let service = PriceService::new(provider);
//!
//!     for point in service.get_prices("aapl", Some(2023)).await {
//!         println!("{} {} {}", point.date, point.open, point.close);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod service;

pub use service::PriceService;

// Re-export core types
pub use quoteline_types::*;

// Re-export fetch functionality
pub use quoteline_fetch::{
    ChartClient, ClientConfig, FetchError, HistoryProvider, HistoryWindow, ParseError,
    YahooProvider,
};

// Re-export sanitizing
pub use quoteline_sanitize::{Rejection, RowSanitizer, SanitizeStats, clean_row, sanitize};

// Re-export formatters
#[cfg(feature = "format")]
pub use quoteline_format::{CsvFormatter, FormatError, Formatter, JsonFormatter, OutputFormat};

/// Prelude module for convenient imports.
///
/// ```
/// use quoteline_lib::prelude::*;
/// ```
pub mod prelude {
    pub use quoteline_types::{
        DateRange, Period, PricePoint, QuotelineError, RawPricePoint, Result, normalize_symbol,
    };

    pub use quoteline_fetch::{ClientConfig, HistoryProvider, HistoryWindow, YahooProvider};

    pub use quoteline_sanitize::sanitize;

    pub use crate::PriceService;

    #[cfg(feature = "format")]
    pub use quoteline_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};
}
