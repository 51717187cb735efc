//! Gas Quotes Backend Server
//!
//! REST API server for the gas price quote and fee schedule tables, plus a
//! single-page-application static fallback.

use gas_quotes_backend::api::create_router;
use gas_quotes_backend::config::Config;
use gas_quotes_backend::state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use gas_quotes_backend::db::{FeeRow, FeeScheduleEntry, QuoteRow};
use gas_quotes_backend::models::{
    AvailableDatesResponse, FeeLookupResponse, FeesResponse, HealthResponse, Indice,
    InsertQuotesResponse, NewQuote, QuoteRecord, QuotesResponse,
};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        gas_quotes_backend::api::handlers::health_check,
        gas_quotes_backend::api::handlers::list_quotes,
        gas_quotes_backend::api::handlers::available_dates,
        gas_quotes_backend::api::handlers::quote_window,
        gas_quotes_backend::api::handlers::insert_quotes,
        gas_quotes_backend::api::handlers::list_fees,
        gas_quotes_backend::api::handlers::lookup_fee,
    ),
    components(
        schemas(
            HealthResponse,
            Indice,
            QuotesResponse,
            QuoteRecord,
            QuoteRow,
            AvailableDatesResponse,
            NewQuote,
            InsertQuotesResponse,
            FeesResponse,
            FeeScheduleEntry,
            FeeLookupResponse,
            FeeRow,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Quotes", description = "Gas price quote queries and ingestion"),
        (name = "Fees", description = "Fee schedule lookups"),
    ),
    info(
        title = "Gas Quotes API",
        version = "0.1.0",
        description = "REST API for gas price quotes and fee schedule lookups",
        license(name = "MIT")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let state = Arc::new(AppState::from_config(&config));

    info!("Starting Gas Quotes Backend on {}", config.bind_addr());
    info!(
        "Swagger UI available at http://{}/swagger-ui/",
        config.bind_addr()
    );

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    let app = create_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start the server
    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Listening on {}", config.bind_addr());

    axum::serve(listener, app).await?;

    Ok(())
}
