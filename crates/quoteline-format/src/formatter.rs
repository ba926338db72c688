//! Output format selection and the writer trait.

use quoteline_types::PricePoint;
use std::io::Write;
use thiserror::Error;

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Comma-separated rows with a header.
    Csv,
    /// JSON array, the same shape the price API serves.
    #[default]
    Json,
    /// One JSON row per line.
    Ndjson,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        }
    }

    /// Returns the media type for this format.
    #[must_use]
    pub const fn media_type(&self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Json => "application/json",
            Self::Ndjson => "application/x-ndjson",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Csv, Self::Json, Self::Ndjson]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "ndjson" | "jsonl" => Ok(Self::Ndjson),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur while writing a price series.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format name.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// Writing to the sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A row could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes a cleaned price series to a byte sink.
pub trait Formatter: Send + Sync {
    /// Writes `points` in order, one row per price point.
    ///
    /// # Errors
    ///
    /// Returns an error if writing or serialization fails.
    fn write_prices<W: Write + Send>(
        &self,
        points: &[PricePoint],
        writer: W,
    ) -> Result<(), FormatError>;

    /// Renders `points` into a buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn render(&self, points: &[PricePoint]) -> Result<Vec<u8>, FormatError> {
        let mut out = Vec::new();
        self.write_prices(points, &mut out)?;
        Ok(out)
    }

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}
