//! Shared application state.

use quoteline_lib::PriceService;

use crate::ServerConfig;

/// State shared by all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: ServerConfig,
    /// Price lookup pipeline.
    pub service: PriceService,
}

impl AppState {
    /// Creates application state.
    #[must_use]
    pub const fn new(config: ServerConfig, service: PriceService) -> Self {
        Self { config, service }
    }
}
