//! Route configuration.

use crate::api::{handlers, static_files};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use std::sync::Arc;

/// Creates the API router.
///
/// Static segments take precedence over captures, so `/api/v1/gas/fee`
/// resolves to the fee handlers rather than `{indice}`. Everything outside
/// the API surface falls through to the SPA static handler.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/api/health", get(handlers::health_check))
        // Quotes
        .route(
            "/api/v1/gas",
            get(handlers::list_quotes).post(handlers::insert_quotes),
        )
        .route("/api/v1/gas/{indice}", get(handlers::available_dates))
        .route(
            "/api/v1/gas/{indice}/{trade_date}",
            get(handlers::quote_window),
        )
        // Fee schedule
        .route("/api/v1/gas/fee", get(handlers::list_fees))
        .route("/api/v1/gas/fee/{meses}", get(handlers::lookup_fee))
        // SPA bundle for everything else
        .fallback(static_files::spa_fallback)
        .with_state(state)
}
