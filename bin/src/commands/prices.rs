//! Prices command implementation.
//!
//! Fetches one symbol's daily series and writes it in the requested format.

use crate::display::{Format, write_prices};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use quoteline_lib::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Fetch and write the daily series for `symbol`.
#[allow(clippy::too_many_arguments)]
pub(crate) async fn prices(
    symbol: &str,
    year: Option<i32>,
    period: Option<Period>,
    format: Format,
    output: Option<PathBuf>,
    pretty: bool,
    timeout_secs: u64,
    quiet: bool,
) -> Result<()> {
    let provider = super::yahoo_provider(timeout_secs)?;
    let service = PriceService::new(Arc::new(provider));

    let spinner = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .context("Invalid progress template")?,
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    };
    spinner.set_message(format!("Fetching {symbol}"));

    let result = match period {
        Some(period) => {
            service
                .try_prices_in(symbol, HistoryWindow::Period(period))
                .await
        }
        None => service.try_prices(symbol, year).await,
    };

    let points = match result {
        Ok(points) => points,
        Err(e) => {
            spinner.abandon_with_message("Failed");
            return Err(e).with_context(|| format!("Failed to fetch prices for {symbol}"));
        }
    };
    spinner.finish_and_clear();

    write_prices(&points, output.as_deref(), format, pretty)?;

    if let Some(output) = output
        && !quiet
    {
        println!("Wrote {} rows to: {}", points.len(), output.display());
    }

    Ok(())
}
