//! Serve command implementation.

use anyhow::{Context, Result};
use quoteline_lib::PriceService;
use quoteline_server::{AppState, CorsConfig, PriceServer, ServerConfig};
use std::sync::Arc;
use tracing::{info, warn};

/// Run the price API until Ctrl-C.
pub(crate) async fn serve(host: String, port: u16, cors: bool, timeout_secs: u64) -> Result<()> {
    let provider = super::yahoo_provider(timeout_secs)?;
    let service = PriceService::new(Arc::new(provider));

    let config = ServerConfig {
        host,
        port,
        cors: CorsConfig {
            enabled: cors,
            ..Default::default()
        },
    };
    info!(provider = service.provider_name(), cors, timeout_secs, "starting server");

    PriceServer::new(Arc::new(AppState::new(config, service)))
        .run_with_shutdown(shutdown_signal())
        .await
        .context("Price API failed")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl-C, running until killed");
        std::future::pending::<()>().await;
    }
}
