//! CLI command implementations.

pub(crate) mod prices;
pub(crate) mod range;
pub(crate) mod serve;

use anyhow::{Context, Result};
use quoteline_lib::prelude::*;
use std::time::Duration;

/// Builds the Yahoo provider with the given request timeout.
fn yahoo_provider(timeout_secs: u64) -> Result<YahooProvider> {
    let config = ClientConfig {
        timeout: Duration::from_secs(timeout_secs),
        ..Default::default()
    };
    YahooProvider::new(config).context("Failed to create HTTP client")
}
