//! Output formatting for the quoteline CLI.

use anyhow::{Context, Result};
use clap::ValueEnum;
use quoteline_lib::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Output format for price series.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Tsv,
    Json,
    Ndjson,
}

/// Write price points to `output`, or stdout when no path is given.
pub(crate) fn write_prices(
    points: &[PricePoint],
    output: Option<&Path>,
    format: Format,
    pretty: bool,
) -> Result<()> {
    let writer: Box<dyn Write + Send> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(std::io::stdout())),
    };

    write_to(points, writer, format, pretty)
}

fn write_to<W: Write + Send>(
    points: &[PricePoint],
    mut writer: W,
    format: Format,
    pretty: bool,
) -> Result<()> {
    match format {
        Format::Csv => CsvFormatter::new().write_prices(points, &mut writer)?,
        Format::Tsv => CsvFormatter::tsv().write_prices(points, &mut writer)?,
        Format::Json => JsonFormatter::new()
            .with_pretty(pretty)
            .write_prices(points, &mut writer)?,
        Format::Ndjson => JsonFormatter::ndjson().write_prices(points, &mut writer)?,
    }

    writer.flush().context("Failed to flush output")
}
