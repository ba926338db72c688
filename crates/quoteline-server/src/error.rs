//! Server error types.

use thiserror::Error;

/// Errors that stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The configured address is not a socket address.
    #[error("Invalid bind address {addr}: {source}")]
    InvalidAddress {
        /// The configured address.
        addr: String,
        /// Parse failure.
        source: std::net::AddrParseError,
    },

    /// The listener could not be bound.
    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        /// The configured address.
        addr: String,
        /// I/O failure.
        source: std::io::Error,
    },

    /// The server loop failed.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}
