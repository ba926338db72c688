//! Route definitions.

use axum::{
    Json, Router,
    response::{IntoResponse, Response},
    routing::get,
};
use quoteline_lib::PricePoint;
use std::{any::Any, sync::Arc};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::error;

use crate::AppState;
use crate::config::CorsConfig;
use crate::handlers::{health, prices};

/// Creates the router with all routes and middleware.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = build_cors_layer(&state.config.cors);

    Router::new()
        .route("/api/prices/{symbol}", get(prices::get_prices))
        .route("/api/prices/{symbol}/", get(prices::get_prices))
        .route("/api/prices", get(prices::no_symbol))
        .route("/api/prices/", get(prices::no_symbol))
        .route("/health", get(health::health_check))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Builds the CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    if !config.enabled {
        return CorsLayer::new();
    }

    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin)
        .max_age(config.max_age())
}

/// A panicking handler still answers with an empty series.
fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(panic = message, "handler panicked");

    Json(Vec::<PricePoint>::new()).into_response()
}
