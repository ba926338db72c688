//! JSON output for price series.
//!
//! The array style is the same document the HTTP endpoint serves, so a file
//! written here can stand in for a recorded API response.

use quoteline_types::PricePoint;
use std::io::Write;

use crate::{FormatError, Formatter};

/// Layout of the JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// One array holding every row.
    #[default]
    Array,
    /// One object per line (NDJSON/JSONL).
    Ndjson,
}

/// JSON formatter. Absent `high`, `low` and `volume` are written as `null`.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    style: JsonStyle,
    /// Indent the array output. Ignored for NDJSON, which must stay one row per line.
    pretty: bool,
}

impl JsonFormatter {
    /// Array formatter, compact.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: JsonStyle::Array,
            pretty: false,
        }
    }

    /// Line-per-row formatter.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            style: JsonStyle::Ndjson,
            pretty: false,
        }
    }

    /// Sets whether to indent array output.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Sets the output style.
    #[must_use]
    pub const fn with_style(mut self, style: JsonStyle) -> Self {
        self.style = style;
        self
    }

    fn write_array<W: Write>(&self, points: &[PricePoint], writer: &mut W) -> Result<(), FormatError> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, points)?;
        } else {
            serde_json::to_writer(&mut *writer, points)?;
        }
        writeln!(writer)?;
        Ok(())
    }

    fn write_lines<W: Write>(points: &[PricePoint], writer: &mut W) -> Result<(), FormatError> {
        for point in points {
            serde_json::to_writer(&mut *writer, point)?;
            writer.write_all(b"\n")?;
        }
        Ok(())
    }
}

impl Formatter for JsonFormatter {
    fn write_prices<W: Write + Send>(
        &self,
        points: &[PricePoint],
        mut writer: W,
    ) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Array => self.write_array(points, &mut writer),
            JsonStyle::Ndjson => Self::write_lines(points, &mut writer),
        }
    }

    fn extension(&self) -> &str {
        match self.style {
            JsonStyle::Array => "json",
            JsonStyle::Ndjson => "ndjson",
        }
    }
}
