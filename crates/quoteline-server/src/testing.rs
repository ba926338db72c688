//! Test doubles shared by handler and router tests.

use async_trait::async_trait;
use quoteline_lib::{
    FetchError, HistoryProvider, HistoryWindow, PriceService, RawPricePoint, RowKey,
};
use std::sync::{Arc, Mutex};

use crate::{AppState, ServerConfig};

/// Provider answering every query with one valid and one invalid row.
#[derive(Debug, Default)]
pub(crate) struct StubProvider {
    pub(crate) fail: bool,
    pub(crate) panic: bool,
    pub(crate) calls: Mutex<Vec<(String, HistoryWindow)>>,
}

#[async_trait]
impl HistoryProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    async fn daily_history(
        &self,
        symbol: &str,
        window: HistoryWindow,
    ) -> Result<Vec<RawPricePoint>, FetchError> {
        self.calls.lock().unwrap().push((symbol.to_string(), window));
        assert!(!self.panic, "provider exploded");
        if self.fail {
            return Err(FetchError::ServerError { status: 502 });
        }
        Ok(vec![
            RawPricePoint::new(RowKey::Text("2023-05-01T00:00:00".into()))
                .with_open(150.0)
                .with_high(153.0)
                .with_low(149.5)
                .with_close(152.3)
                .with_volume(1_000_000_i64),
            RawPricePoint::new(RowKey::Text("2023-05-02T00:00:00".into()))
                .with_open(0.0)
                .with_close(152.0),
        ])
    }
}

pub(crate) fn state_with(provider: Arc<StubProvider>) -> Arc<AppState> {
    Arc::new(AppState::new(
        ServerConfig::default(),
        PriceService::new(provider),
    ))
}
