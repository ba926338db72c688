//! Daily price history retrieval for the quoteline service.
//!
//! This crate provides the data retrieval pipeline:
//!
//! - [`url::chart_url`] - Constructs chart endpoint URLs
//! - [`ChartClient`] - Pooled HTTP client
//! - [`parse_chart`] - Chart response parsing into raw rows
//! - [`HistoryProvider`] - Provider abstraction, implemented by [`YahooProvider`]

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod parse;
mod provider;
pub mod url;

pub use client::{ChartClient, ClientConfig, FetchError};
pub use parse::{ParseError, parse_chart};
pub use provider::{HistoryProvider, HistoryWindow, YahooProvider};
