//! Price series handler.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};
use quoteline_lib::PricePoint;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::AppState;

/// Query parameters of the price route.
///
/// `year` is kept as text so a malformed value can be answered with an empty
/// series instead of a rejection.
#[derive(Debug, Default, Deserialize)]
pub struct PriceQuery {
    /// Calendar year to fetch.
    pub year: Option<String>,
}

impl PriceQuery {
    /// Parses the year. `Ok(None)` when absent or blank, `Err` when not an integer.
    fn year(&self) -> Result<Option<i32>, std::num::ParseIntError> {
        match self.year.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse().map(Some),
        }
    }
}

/// Daily price series for a symbol.
///
/// GET /api/prices/{symbol}?year=YYYY
///
/// Always answers `200` with a JSON array; any failure yields `[]`.
pub async fn get_prices(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<PriceQuery>, QueryRejection>,
) -> Json<Vec<PricePoint>> {
    let Path(symbol) = match path {
        Ok(path) => path,
        Err(rejection) => {
            warn!(error = %rejection, "unreadable symbol");
            return Json(Vec::new());
        }
    };

    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            warn!(%symbol, error = %rejection, "unreadable query");
            return Json(Vec::new());
        }
    };

    let year = match query.year() {
        Ok(year) => year,
        Err(e) => {
            debug!(%symbol, year = ?query.year, error = %e, "non-integer year");
            return Json(Vec::new());
        }
    };

    Json(state.service.get_prices(&symbol, year).await)
}

/// Price route without a symbol segment.
///
/// GET /api/prices/
pub async fn no_symbol() -> Json<Vec<PricePoint>> {
    debug!("price request without symbol");
    Json(Vec::new())
}
