//! Row validation and cleaning for quoteline price series.
//!
//! This crate turns provider rows into validated price points:
//!
//! - [`sanitize`] - Filter a whole series in one call
//! - [`RowSanitizer`] - Streaming sanitizer that keeps drop statistics
//! - [`clean_row`] - Validate a single row, reporting why it was rejected

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod rejection;
mod sanitizer;

pub use rejection::{Field, Rejection};
pub use sanitizer::{RowSanitizer, SanitizeStats, clean_row, sanitize};
