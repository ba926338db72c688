//! Server runner.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::{AppState, ServerConfig, ServerError, create_router};

/// HTTP server for the price API.
#[derive(Debug)]
pub struct PriceServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl PriceServer {
    /// Creates a server around shared state.
    #[must_use]
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            config: state.config.clone(),
            state,
        }
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub const fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Binds the configured address.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is invalid or cannot be bound.
    pub async fn bind(&self) -> Result<TcpListener, ServerError> {
        let addr = self.config.bind_address();
        let socket_addr: SocketAddr = addr
            .parse()
            .map_err(|source| ServerError::InvalidAddress {
                addr: addr.clone(),
                source,
            })?;

        TcpListener::bind(socket_addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })
    }

    /// Runs the server until the process is stopped.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind or run.
    pub async fn run(self) -> Result<(), ServerError> {
        self.run_with_shutdown(std::future::pending()).await
    }

    /// Runs the server until `shutdown_signal` resolves.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind or run.
    pub async fn run_with_shutdown(
        self,
        shutdown_signal: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), ServerError> {
        let listener = self.bind().await?;
        self.serve(listener, shutdown_signal).await
    }

    /// Serves on an already bound listener until `shutdown_signal` resolves.
    ///
    /// # Errors
    ///
    /// Returns an error if the server loop fails.
    pub async fn serve(
        self,
        listener: TcpListener,
        shutdown_signal: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), ServerError> {
        let app = create_router(self.state);

        match listener.local_addr() {
            Ok(addr) => info!(%addr, "price API listening"),
            Err(_) => info!(addr = %self.config.bind_address(), "price API listening"),
        }

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(ServerError::Serve)?;

        warn!("price API shutting down");

        Ok(())
    }
}
