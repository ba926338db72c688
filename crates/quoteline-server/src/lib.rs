//! HTTP facade serving cleaned daily stock prices.
//!
//! - [`create_router`] - Routes and middleware
//! - [`PriceServer`] - Binds and serves the router
//! - [`ServerConfig`] - Bind address and CORS settings

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
pub mod handlers;
mod routes;
mod server;
mod state;

#[cfg(test)]
mod testing;

pub use config::{CorsConfig, ServerConfig};
pub use error::ServerError;
pub use routes::create_router;
pub use server::PriceServer;
pub use state::AppState;
